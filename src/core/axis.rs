use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::animated::AnimatedScalar;
use crate::core::color::Color;
use crate::core::formatter::ValueFormatter;

/// Axis label text size used when a host supplies none.
pub const DEFAULT_AXIS_TEXT_SIZE: f64 = 12.0;

/// Widest label, in characters, an auto-generated axis reserves room for.
pub const DEFAULT_MAX_LABEL_CHARS: usize = 4;

/// Single labeled stop on an axis, animated like every other chart value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisValue {
    value: AnimatedScalar,
    label: Option<String>,
}

impl AxisValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: AnimatedScalar::new(value),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.value()
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.value.target()
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn set(&mut self, value: f64) {
        self.value.set(value);
    }

    pub fn set_target(&mut self, target: f64) {
        self.value.set_target(target);
    }

    pub fn update(&mut self, scale: f64) {
        self.value.update(scale);
    }

    pub fn finish(&mut self) {
        self.value.finish();
    }
}

/// Per-edge axis model: labeled stops plus the styling a renderer needs.
///
/// Purely data; tick selection and text measurement belong to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    values: Vec<AxisValue>,
    name: Option<String>,
    auto_generated: bool,
    has_lines: bool,
    has_separation_line: bool,
    inside: bool,
    text_color: Color,
    text_size: f64,
    max_label_chars: usize,
    formatter: ValueFormatter,
}

impl Axis {
    /// Axis over explicit stops; `auto_generated` starts off.
    #[must_use]
    pub fn new(values: Vec<AxisValue>) -> Self {
        Self {
            values,
            auto_generated: false,
            ..Self::default()
        }
    }

    /// Axis whose stops the host derives from visible data each relayout.
    #[must_use]
    pub fn auto() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn values(&self) -> &[AxisValue] {
        &self.values
    }

    #[must_use]
    pub fn values_mut(&mut self) -> &mut [AxisValue] {
        &mut self.values
    }

    pub fn set_values(&mut self, values: Vec<AxisValue>) {
        self.values = values;
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    #[must_use]
    pub fn is_auto_generated(&self) -> bool {
        self.auto_generated
    }

    pub fn set_auto_generated(&mut self, auto_generated: bool) {
        self.auto_generated = auto_generated;
    }

    #[must_use]
    pub fn has_lines(&self) -> bool {
        self.has_lines
    }

    pub fn set_has_lines(&mut self, has_lines: bool) {
        self.has_lines = has_lines;
    }

    #[must_use]
    pub fn has_separation_line(&self) -> bool {
        self.has_separation_line
    }

    pub fn set_has_separation_line(&mut self, has_separation_line: bool) {
        self.has_separation_line = has_separation_line;
    }

    /// Whether labels draw inside the chart area instead of the margin.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn set_inside(&mut self, inside: bool) {
        self.inside = inside;
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, text_color: Color) {
        self.text_color = text_color;
    }

    #[must_use]
    pub fn text_size(&self) -> f64 {
        self.text_size
    }

    pub fn set_text_size(&mut self, text_size: f64) {
        self.text_size = text_size;
    }

    #[must_use]
    pub fn max_label_chars(&self) -> usize {
        self.max_label_chars
    }

    pub fn set_max_label_chars(&mut self, max_label_chars: usize) {
        self.max_label_chars = max_label_chars;
    }

    #[must_use]
    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    /// Replaces the formatter; an absent one keeps the previous formatter
    /// so the axis is never left without a formatting strategy.
    pub fn set_formatter(&mut self, formatter: Option<ValueFormatter>) {
        match formatter {
            Some(formatter) => self.formatter = formatter,
            None => debug!("ignored absent axis formatter, keeping previous"),
        }
    }

    pub fn update(&mut self, scale: f64) {
        for value in &mut self.values {
            value.update(scale);
        }
    }

    pub fn finish(&mut self) {
        for value in &mut self.values {
            value.finish();
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            name: None,
            auto_generated: true,
            has_lines: false,
            has_separation_line: true,
            inside: false,
            text_color: Color::rgb(0.6, 0.6, 0.6),
            text_size: DEFAULT_AXIS_TEXT_SIZE,
            max_label_chars: DEFAULT_MAX_LABEL_CHARS,
            formatter: ValueFormatter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_disable_auto_generation() {
        let axis = Axis::new(vec![AxisValue::new(0.0), AxisValue::new(10.0)]);
        assert!(!axis.is_auto_generated());
        assert_eq!(axis.values().len(), 2);
    }

    #[test]
    fn absent_formatter_keeps_previous() {
        let mut axis = Axis::auto();
        axis.set_formatter(Some(ValueFormatter::new(3)));
        axis.set_formatter(None);
        assert_eq!(axis.formatter().decimal_digits(), 3);
    }

    #[test]
    fn update_and_finish_reach_every_stop() {
        let mut axis = Axis::new(vec![AxisValue::new(0.0), AxisValue::new(1.0)]);
        for value in axis.values_mut() {
            value.set_target(2.0);
        }
        axis.update(0.5);
        assert_eq!(axis.values()[0].value(), 1.0);
        assert_eq!(axis.values()[1].value(), 1.5);

        axis.finish();
        assert_eq!(axis.values()[0].value(), 2.0);
        assert_eq!(axis.values()[1].value(), 2.0);
    }
}
