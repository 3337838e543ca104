use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::formatter::ValueFormatter;
use crate::model::values::SubcolumnValue;

/// One column: an ordered stack of subcolumn segments.
///
/// Segment order is insertion order and is preserved through clone and
/// serialization; it determines stacking order for the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Column {
    values: Vec<SubcolumnValue>,
    has_labels: bool,
    has_labels_only_for_selected: bool,
    formatter: ValueFormatter,
}

impl Column {
    #[must_use]
    pub fn new(values: Vec<SubcolumnValue>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn values(&self) -> &[SubcolumnValue] {
        &self.values
    }

    #[must_use]
    pub fn values_mut(&mut self) -> &mut [SubcolumnValue] {
        &mut self.values
    }

    pub fn set_values(&mut self, values: Vec<SubcolumnValue>) {
        self.values = values;
    }

    #[must_use]
    pub fn has_labels(&self) -> bool {
        self.has_labels
    }

    /// Enabling labels for all segments clears the selected-only mode.
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

    /// Enabling selected-only labels clears the all-segments mode.
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
    /// so the column is never left without a formatting strategy.
    pub fn set_formatter(&mut self, formatter: Option<ValueFormatter>) {
        match formatter {
            Some(formatter) => self.formatter = formatter,
            None => debug!("ignored absent column formatter, keeping previous"),
        }
    }

    pub fn update(&mut self, scale: f64) {
        crate::model::for_each_value(&mut self.values, |value| value.update(scale));
    }

    pub fn finish(&mut self) {
        crate::model::for_each_value(&mut self.values, SubcolumnValue::finish);
    }
}
