use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::axis::Axis;
use crate::core::color::Color;
use crate::core::formatter::ValueFormatter;
use crate::model::chart_config::ChartConfig;
use crate::model::values::SliceValue;

/// Center circle radius as a fraction of the pie radius.
pub const DEFAULT_CENTER_CIRCLE_SCALE: f64 = 0.6;

/// Primary center text size used when a host supplies none.
pub const DEFAULT_CENTER_TEXT1_SIZE: f64 = 42.0;

/// Secondary center text size used when a host supplies none.
pub const DEFAULT_CENTER_TEXT2_SIZE: f64 = 16.0;

/// Gap between adjacent slices, in display units.
pub const DEFAULT_SLICE_SPACING: f64 = 2.0;

/// Data for a pie chart: an ordered ring of slices, no Cartesian axes.
///
/// Pie charts have no axes by domain rule: every axis setter silently
/// discards its input and the getters always return `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    config: ChartConfig,
    slices: Vec<SliceValue>,
    has_labels: bool,
    has_labels_only_for_selected: bool,
    has_center_circle: bool,
    center_circle_scale: f64,
    center_circle_color: Option<Color>,
    center_text1: Option<String>,
    center_text1_color: Color,
    center_text1_size: f64,
    center_text2: Option<String>,
    center_text2_color: Color,
    center_text2_size: f64,
    slice_spacing: f64,
    formatter: ValueFormatter,
}

impl PieChartData {
    #[must_use]
    pub fn new(slices: Vec<SliceValue>) -> Self {
        Self {
            slices,
            ..Self::default()
        }
    }

    /// Shared value-label configuration. Read-only: pie mutations go
    /// through this type's own setters so the no-axes rule cannot be
    /// bypassed.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn slices(&self) -> &[SliceValue] {
        &self.slices
    }

    #[must_use]
    pub fn slices_mut(&mut self) -> &mut [SliceValue] {
        &mut self.slices
    }

    pub fn set_slices(&mut self, slices: Vec<SliceValue>) {
        self.slices = slices;
    }

    #[must_use]
    pub fn has_labels(&self) -> bool {
        self.has_labels
    }

    /// Enabling labels for all slices clears the selected-only mode.
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

    /// Enabling selected-only labels clears the all-slices mode.
    pub fn set_has_labels_only_for_selected(&mut self, only_for_selected: bool) {
        self.has_labels_only_for_selected = only_for_selected;
        if only_for_selected {
            self.has_labels = false;
        }
    }

    #[must_use]
    pub fn has_center_circle(&self) -> bool {
        self.has_center_circle
    }

    pub fn set_has_center_circle(&mut self, has_center_circle: bool) {
        self.has_center_circle = has_center_circle;
    }

    #[must_use]
    pub fn center_circle_scale(&self) -> f64 {
        self.center_circle_scale
    }

    /// Sets the center circle scale, clamped into `(0, 1]`.
    pub fn set_center_circle_scale(&mut self, scale: f64) {
        self.center_circle_scale = scale.clamp(f64::MIN_POSITIVE, 1.0);
    }

    #[must_use]
    pub fn center_circle_color(&self) -> Option<Color> {
        self.center_circle_color
    }

    pub fn set_center_circle_color(&mut self, color: Option<Color>) {
        self.center_circle_color = color;
    }

    #[must_use]
    pub fn center_text1(&self) -> Option<&str> {
        self.center_text1.as_deref()
    }

    pub fn set_center_text1(&mut self, text: Option<String>) {
        self.center_text1 = text;
    }

    #[must_use]
    pub fn center_text1_color(&self) -> Color {
        self.center_text1_color
    }

    pub fn set_center_text1_color(&mut self, color: Color) {
        self.center_text1_color = color;
    }

    #[must_use]
    pub fn center_text1_size(&self) -> f64 {
        self.center_text1_size
    }

    pub fn set_center_text1_size(&mut self, size: f64) {
        self.center_text1_size = size;
    }

    #[must_use]
    pub fn center_text2(&self) -> Option<&str> {
        self.center_text2.as_deref()
    }

    pub fn set_center_text2(&mut self, text: Option<String>) {
        self.center_text2 = text;
    }

    #[must_use]
    pub fn center_text2_color(&self) -> Color {
        self.center_text2_color
    }

    pub fn set_center_text2_color(&mut self, color: Color) {
        self.center_text2_color = color;
    }

    #[must_use]
    pub fn center_text2_size(&self) -> f64 {
        self.center_text2_size
    }

    pub fn set_center_text2_size(&mut self, size: f64) {
        self.center_text2_size = size;
    }

    #[must_use]
    pub fn slice_spacing(&self) -> f64 {
        self.slice_spacing
    }

    pub fn set_slice_spacing(&mut self, slice_spacing: f64) {
        self.slice_spacing = slice_spacing;
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
            None => debug!("ignored absent pie formatter, keeping previous"),
        }
    }

    /// Always `None`; pie charts carry no Cartesian axes.
    #[must_use]
    pub fn axis_x_bottom(&self) -> Option<&Axis> {
        None
    }

    /// Discarded; pie charts carry no Cartesian axes.
    pub fn set_axis_x_bottom(&mut self, _axis: Option<Axis>) {
        debug!("discarded bottom axis on pie chart data");
    }

    /// Always `None`; pie charts carry no Cartesian axes.
    #[must_use]
    pub fn axis_x_top(&self) -> Option<&Axis> {
        None
    }

    /// Discarded; pie charts carry no Cartesian axes.
    pub fn set_axis_x_top(&mut self, _axis: Option<Axis>) {
        debug!("discarded top axis on pie chart data");
    }

    /// Always `None`; pie charts carry no Cartesian axes.
    #[must_use]
    pub fn axis_y_left(&self) -> Option<&Axis> {
        None
    }

    /// Discarded; pie charts carry no Cartesian axes.
    pub fn set_axis_y_left(&mut self, _axis: Option<Axis>) {
        debug!("discarded left axis on pie chart data");
    }

    /// Always `None`; pie charts carry no Cartesian axes.
    #[must_use]
    pub fn axis_y_right(&self) -> Option<&Axis> {
        None
    }

    /// Discarded; pie charts carry no Cartesian axes.
    pub fn set_axis_y_right(&mut self, _axis: Option<Axis>) {
        debug!("discarded right axis on pie chart data");
    }

    /// Value-label styling passthrough kept explicit because `config` is
    /// read-only on pie charts.
    pub fn set_value_label_text_color(&mut self, color: Color) {
        self.config.value_label_text_color = color;
    }

    pub fn set_value_label_text_size(&mut self, size: f64) {
        self.config.value_label_text_size = size;
    }

    pub fn set_value_label_typeface(&mut self, typeface: Option<String>) {
        self.config.value_label_typeface = typeface;
    }

    pub fn set_value_label_background_enabled(&mut self, enabled: bool) {
        self.config.value_label_background_enabled = enabled;
    }

    pub fn set_value_label_background_auto(&mut self, auto: bool) {
        self.config.value_label_background_auto = auto;
    }

    pub fn set_value_label_background_color(&mut self, color: Color) {
        self.config.value_label_background_color = color;
    }

    pub fn update(&mut self, scale: f64) {
        crate::model::for_each_value(&mut self.slices, |slice| slice.update(scale));
    }

    pub fn finish(&mut self) {
        crate::model::for_each_value(&mut self.slices, SliceValue::finish);
    }
}

impl Default for PieChartData {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            slices: Vec::new(),
            has_labels: false,
            has_labels_only_for_selected: false,
            has_center_circle: false,
            center_circle_scale: DEFAULT_CENTER_CIRCLE_SCALE,
            center_circle_color: None,
            center_text1: None,
            center_text1_color: Color::rgb(0.0, 0.0, 0.0),
            center_text1_size: DEFAULT_CENTER_TEXT1_SIZE,
            center_text2: None,
            center_text2_color: Color::rgb(0.0, 0.0, 0.0),
            center_text2_size: DEFAULT_CENTER_TEXT2_SIZE,
            slice_spacing: DEFAULT_SLICE_SPACING,
            formatter: ValueFormatter::default(),
        }
    }
}
