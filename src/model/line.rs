use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::color::{Color, DEFAULT_SERIES_COLOR};
use crate::core::formatter::ValueFormatter;
use crate::model::values::{PointShape, PointValue};

/// Stroke width used when a host supplies none, in display units.
pub const DEFAULT_LINE_STROKE_WIDTH: f64 = 3.0;

/// Point marker radius used when a host supplies none, in display units.
pub const DEFAULT_POINT_RADIUS: f64 = 6.0;

/// Alpha (0-255) applied to the fill under a filled line.
pub const DEFAULT_AREA_TRANSPARENCY: u8 = 64;

/// One drawable polyline and its per-series styling.
///
/// Point order is insertion order and is preserved through clone and
/// serialization; the renderer draws members left to right in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    values: Vec<PointValue>,
    color: Color,
    point_color: Option<Color>,
    darken_color: Color,
    stroke_width: f64,
    point_radius: f64,
    area_transparency: u8,
    shape: PointShape,
    has_points: bool,
    has_lines: bool,
    has_labels: bool,
    has_labels_only_for_selected: bool,
    is_cubic: bool,
    is_square: bool,
    is_filled: bool,
    formatter: ValueFormatter,
}

impl Line {
    #[must_use]
    pub fn new(values: Vec<PointValue>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    #[must_use]
    pub fn values(&self) -> &[PointValue] {
        &self.values
    }

    #[must_use]
    pub fn values_mut(&mut self) -> &mut [PointValue] {
        &mut self.values
    }

    pub fn set_values(&mut self, values: Vec<PointValue>) {
        self.values = values;
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        if self.point_color.is_none() {
            self.darken_color = color.darken();
        }
    }

    /// Point marker color; falls back to the line color until overridden.
    #[must_use]
    pub fn point_color(&self) -> Color {
        self.point_color.unwrap_or(self.color)
    }

    /// Overrides the point color, or clears the override with `None`.
    ///
    /// The derived highlight color follows whichever color is in effect.
    pub fn set_point_color(&mut self, point_color: Option<Color>) {
        self.point_color = point_color;
        self.darken_color = match point_color {
            Some(color) => color.darken(),
            None => self.color.darken(),
        };
    }

    /// Highlight color derived from the effective point color.
    #[must_use]
    pub fn darken_color(&self) -> Color {
        self.darken_color
    }

    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, stroke_width: f64) {
        self.stroke_width = stroke_width;
    }

    #[must_use]
    pub fn point_radius(&self) -> f64 {
        self.point_radius
    }

    pub fn set_point_radius(&mut self, point_radius: f64) {
        self.point_radius = point_radius;
    }

    #[must_use]
    pub fn area_transparency(&self) -> u8 {
        self.area_transparency
    }

    pub fn set_area_transparency(&mut self, area_transparency: u8) {
        self.area_transparency = area_transparency;
    }

    #[must_use]
    pub fn shape(&self) -> PointShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: PointShape) {
        self.shape = shape;
    }

    #[must_use]
    pub fn has_points(&self) -> bool {
        self.has_points
    }

    pub fn set_has_points(&mut self, has_points: bool) {
        self.has_points = has_points;
    }

    #[must_use]
    pub fn has_lines(&self) -> bool {
        self.has_lines
    }

    pub fn set_has_lines(&mut self, has_lines: bool) {
        self.has_lines = has_lines;
    }

    #[must_use]
    pub fn has_labels(&self) -> bool {
        self.has_labels
    }

    /// Enabling labels for all points clears the selected-only mode.
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

    /// Enabling selected-only labels clears the all-points mode.
    pub fn set_has_labels_only_for_selected(&mut self, only_for_selected: bool) {
        self.has_labels_only_for_selected = only_for_selected;
        if only_for_selected {
            self.has_labels = false;
        }
    }

    #[must_use]
    pub fn is_cubic(&self) -> bool {
        self.is_cubic
    }

    /// Cubic interpolation excludes the square (step) path mode.
    pub fn set_cubic(&mut self, is_cubic: bool) {
        self.is_cubic = is_cubic;
        if is_cubic {
            self.is_square = false;
        }
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.is_square
    }

    /// Square (step) path mode excludes cubic interpolation.
    pub fn set_square(&mut self, is_square: bool) {
        self.is_square = is_square;
        if is_square {
            self.is_cubic = false;
        }
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.is_filled
    }

    pub fn set_filled(&mut self, is_filled: bool) {
        self.is_filled = is_filled;
    }

    #[must_use]
    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    /// Replaces the formatter; an absent one keeps the previous formatter
    /// so the series is never left without a formatting strategy.
    pub fn set_formatter(&mut self, formatter: Option<ValueFormatter>) {
        match formatter {
            Some(formatter) => self.formatter = formatter,
            None => debug!("ignored absent line formatter, keeping previous"),
        }
    }

    pub fn update(&mut self, scale: f64) {
        crate::model::for_each_value(&mut self.values, |value| value.update(scale));
    }

    pub fn finish(&mut self) {
        crate::model::for_each_value(&mut self.values, PointValue::finish);
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            color: DEFAULT_SERIES_COLOR,
            point_color: None,
            darken_color: DEFAULT_SERIES_COLOR.darken(),
            stroke_width: DEFAULT_LINE_STROKE_WIDTH,
            point_radius: DEFAULT_POINT_RADIUS,
            area_transparency: DEFAULT_AREA_TRANSPARENCY,
            shape: PointShape::default(),
            has_points: true,
            has_lines: true,
            has_labels: false,
            has_labels_only_for_selected: false,
            is_cubic: false,
            is_square: false,
            is_filled: false,
            formatter: ValueFormatter::default(),
        }
    }
}
