use chartmotion_rs::model::selection::UNSET_INDEX;
use chartmotion_rs::model::{SelectedValue, SelectedValueType};

#[test]
fn fresh_selection_is_unset() {
    let selection = SelectedValue::new();
    assert!(!selection.is_set());
    assert_eq!(selection.first_index(), UNSET_INDEX);
    assert_eq!(selection.second_index(), UNSET_INDEX);
    assert_eq!(selection.value_type(), SelectedValueType::None);
}

#[test]
fn set_then_clear_round_trips_through_the_sentinel() {
    let mut selection = SelectedValue::new();

    selection.set(2, 3, Some(SelectedValueType::Line));
    assert!(selection.is_set());
    assert_eq!(selection.first_index(), 2);
    assert_eq!(selection.second_index(), 3);
    assert_eq!(selection.value_type(), SelectedValueType::Line);

    selection.clear();
    assert!(!selection.is_set());
    assert_eq!(selection.first_index(), UNSET_INDEX);
    assert_eq!(selection.second_index(), UNSET_INDEX);
    assert_eq!(selection.value_type(), SelectedValueType::None);
}

#[test]
fn absent_type_coerces_to_none() {
    let mut selection = SelectedValue::new();
    selection.set(0, 0, None);

    assert!(selection.is_set());
    assert_eq!(selection.value_type(), SelectedValueType::None);
}

#[test]
fn negative_index_means_unset() {
    let mut selection = SelectedValue::new();

    selection.set(-1, 4, Some(SelectedValueType::Column));
    assert!(!selection.is_set());

    selection.set(4, -1, Some(SelectedValueType::Column));
    assert!(!selection.is_set());

    selection.set(0, 0, Some(SelectedValueType::Column));
    assert!(selection.is_set());
}

#[test]
fn out_of_range_indices_are_stored_verbatim() {
    // Bounds-checking against series length is the caller's concern.
    let mut selection = SelectedValue::new();
    selection.set(1_000_000, 2_000_000, Some(SelectedValueType::Column));

    assert!(selection.is_set());
    assert_eq!(selection.first_index(), 1_000_000);
    assert_eq!(selection.second_index(), 2_000_000);
}
