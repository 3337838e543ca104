use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::axis::Axis;
use crate::core::formatter::ValueFormatter;
use crate::model::chart_config::ChartConfig;
use crate::model::values::BubbleValue;

/// Smallest radius any bubble renders at, in display units.
pub const DEFAULT_MIN_BUBBLE_RADIUS: f64 = 6.0;

/// Multiplier applied to every computed bubble radius.
pub const DEFAULT_BUBBLE_SCALE: f64 = 1.0;

/// Data for a bubble chart: a flat list of weighted points over one shared
/// configuration.
///
/// `Clone` is a deep copy; every bubble and axis is owned by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleChartData {
    config: ChartConfig,
    bubbles: Vec<BubbleValue>,
    min_bubble_radius: f64,
    bubble_scale: f64,
    has_labels: bool,
    has_labels_only_for_selected: bool,
    formatter: ValueFormatter,
}

impl BubbleChartData {
    #[must_use]
    pub fn new(bubbles: Vec<BubbleValue>) -> Self {
        Self {
            bubbles,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    #[must_use]
    pub fn bubbles(&self) -> &[BubbleValue] {
        &self.bubbles
    }

    #[must_use]
    pub fn bubbles_mut(&mut self) -> &mut [BubbleValue] {
        &mut self.bubbles
    }

    pub fn set_bubbles(&mut self, bubbles: Vec<BubbleValue>) {
        self.bubbles = bubbles;
    }

    #[must_use]
    pub fn min_bubble_radius(&self) -> f64 {
        self.min_bubble_radius
    }

    pub fn set_min_bubble_radius(&mut self, min_bubble_radius: f64) {
        self.min_bubble_radius = min_bubble_radius;
    }

    #[must_use]
    pub fn bubble_scale(&self) -> f64 {
        self.bubble_scale
    }

    pub fn set_bubble_scale(&mut self, bubble_scale: f64) {
        self.bubble_scale = bubble_scale;
    }

    #[must_use]
    pub fn has_labels(&self) -> bool {
        self.has_labels
    }

    /// Enabling labels for all bubbles clears the selected-only mode.
    pub fn set_has_labels(&mut self, has_labels: bool) {
        self.has_labels = has_labels;
        if has_labels {
            self.has_labels_only_for_selected = false;
        }
    }

    #[must_use]
    pub fn has_labels_only_for_selected(&self) -> bool {
        self.has_labels_only_for_selected
    }

    /// Enabling selected-only labels clears the all-bubbles mode.
    pub fn set_has_labels_only_for_selected(&mut self, only_for_selected: bool) {
        self.has_labels_only_for_selected = only_for_selected;
        if only_for_selected {
            self.has_labels = false;
        }
    }

    #[must_use]
    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    /// Replaces the formatter; an absent one keeps the previous formatter
    /// so the chart is never left without a formatting strategy.
    pub fn set_formatter(&mut self, formatter: Option<ValueFormatter>) {
        match formatter {
            Some(formatter) => self.formatter = formatter,
            None => debug!("ignored absent bubble formatter, keeping previous"),
        }
    }

    #[must_use]
    pub fn axis_x_bottom(&self) -> Option<&Axis> {
        self.config.axis_x_bottom.as_ref()
    }

    pub fn set_axis_x_bottom(&mut self, axis: Option<Axis>) {
        self.config.axis_x_bottom = axis;
    }

    #[must_use]
    pub fn axis_x_top(&self) -> Option<&Axis> {
        self.config.axis_x_top.as_ref()
    }

    pub fn set_axis_x_top(&mut self, axis: Option<Axis>) {
        self.config.axis_x_top = axis;
    }

    #[must_use]
    pub fn axis_y_left(&self) -> Option<&Axis> {
        self.config.axis_y_left.as_ref()
    }

    pub fn set_axis_y_left(&mut self, axis: Option<Axis>) {
        self.config.axis_y_left = axis;
    }

    #[must_use]
    pub fn axis_y_right(&self) -> Option<&Axis> {
        self.config.axis_y_right.as_ref()
    }

    pub fn set_axis_y_right(&mut self, axis: Option<Axis>) {
        self.config.axis_y_right = axis;
    }

    pub fn update(&mut self, scale: f64) {
        crate::model::for_each_value(&mut self.bubbles, |bubble| bubble.update(scale));
        self.config.update(scale);
    }

    pub fn finish(&mut self) {
        crate::model::for_each_value(&mut self.bubbles, BubbleValue::finish);
        self.config.finish();
    }
}

impl Default for BubbleChartData {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            bubbles: Vec::new(),
            min_bubble_radius: DEFAULT_MIN_BUBBLE_RADIUS,
            bubble_scale: DEFAULT_BUBBLE_SCALE,
            has_labels: false,
            has_labels_only_for_selected: false,
            formatter: ValueFormatter::default(),
        }
    }
}
