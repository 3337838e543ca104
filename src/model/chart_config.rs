use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::core::color::{Color, DEFAULT_SERIES_COLOR};

/// Value-label text size used when a host supplies none.
pub const DEFAULT_VALUE_LABEL_TEXT_SIZE: f64 = 12.0;

/// Shared axis and value-label configuration embedded by value in every
/// chart kind.
///
/// Plain data: invariants that depend on chart kind (a pie chart keeps all
/// four axes absent) are enforced by the owning variant's mutators, not
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub axis_x_bottom: Option<Axis>,
    pub axis_x_top: Option<Axis>,
    pub axis_y_left: Option<Axis>,
    pub axis_y_right: Option<Axis>,
    pub value_label_text_color: Color,
    pub value_label_text_size: f64,
    pub value_label_typeface: Option<String>,
    pub value_label_background_enabled: bool,
    pub value_label_background_auto: bool,
    pub value_label_background_color: Color,
}

impl ChartConfig {
    pub fn update(&mut self, scale: f64) {
        for axis in [
            &mut self.axis_x_bottom,
            &mut self.axis_x_top,
            &mut self.axis_y_left,
            &mut self.axis_y_right,
        ]
        .into_iter()
        .flatten()
        {
            axis.update(scale);
        }
    }

    pub fn finish(&mut self) {
        for axis in [
            &mut self.axis_x_bottom,
            &mut self.axis_x_top,
            &mut self.axis_y_left,
            &mut self.axis_y_right,
        ]
        .into_iter()
        .flatten()
        {
            axis.finish();
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            axis_x_bottom: None,
            axis_x_top: None,
            axis_y_left: None,
            axis_y_right: None,
            value_label_text_color: Color::rgb(1.0, 1.0, 1.0),
            value_label_text_size: DEFAULT_VALUE_LABEL_TEXT_SIZE,
            value_label_typeface: None,
            value_label_background_enabled: true,
            value_label_background_auto: true,
            value_label_background_color: DEFAULT_SERIES_COLOR.darken(),
        }
    }
}
