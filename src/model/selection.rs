use serde::{Deserialize, Serialize};

/// Index meaning "nothing selected".
pub const UNSET_INDEX: i32 = i32::MIN;

/// Kind of data a selection points into. Open for chart-kind-specific
/// extension as new series types appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectedValueType {
    #[default]
    None,
    Line,
    Column,
}

/// Currently highlighted series/value index pair.
///
/// A pure value holder: indices are never range-checked against actual
/// series bounds. The host that sets a selection is responsible for its
/// validity when it later indexes into series data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedValue {
    first_index: i32,
    second_index: i32,
    value_type: SelectedValueType,
}

impl SelectedValue {
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_index: UNSET_INDEX,
            second_index: UNSET_INDEX,
            value_type: SelectedValueType::None,
        }
    }

    /// Records a selection. An absent type coerces to
    /// [`SelectedValueType::None`].
    pub fn set(
        &mut self,
        first_index: i32,
        second_index: i32,
        value_type: Option<SelectedValueType>,
    ) {
        self.first_index = first_index;
        self.second_index = second_index;
        self.value_type = value_type.unwrap_or_default();
    }

    /// Returns to the unset state.
    pub fn clear(&mut self) {
        self.first_index = UNSET_INDEX;
        self.second_index = UNSET_INDEX;
        self.value_type = SelectedValueType::None;
    }

    /// True iff both indices are non-negative.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.first_index >= 0 && self.second_index >= 0
    }

    #[must_use]
    pub fn first_index(&self) -> i32 {
        self.first_index
    }

    #[must_use]
    pub fn second_index(&self) -> i32 {
        self.second_index
    }

    #[must_use]
    pub fn value_type(&self) -> SelectedValueType {
        self.value_type
    }
}

impl Default for SelectedValue {
    fn default() -> Self {
        Self::new()
    }
}
