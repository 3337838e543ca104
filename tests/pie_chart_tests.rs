use chartmotion_rs::core::{Axis, Color, ValueFormatter};
use chartmotion_rs::model::{PieChartData, SliceValue};

fn sample_pie() -> PieChartData {
    PieChartData::new(vec![
        SliceValue::new(30.0).with_label("rotor a"),
        SliceValue::new(50.0).with_label("rotor b"),
        SliceValue::new(20.0),
    ])
}

#[test]
fn axes_are_forced_absent() {
    let mut chart = sample_pie();

    chart.set_axis_x_bottom(Some(Axis::auto()));
    chart.set_axis_x_top(Some(Axis::auto()));
    chart.set_axis_y_left(Some(Axis::auto()));
    chart.set_axis_y_right(Some(Axis::auto()));

    assert!(chart.axis_x_bottom().is_none());
    assert!(chart.axis_x_top().is_none());
    assert!(chart.axis_y_left().is_none());
    assert!(chart.axis_y_right().is_none());

    // The shared configuration never saw the axes either.
    assert!(chart.config().axis_x_bottom.is_none());
    assert!(chart.config().axis_y_left.is_none());
}

#[test]
fn label_flags_are_mutually_exclusive() {
    let mut chart = sample_pie();

    chart.set_has_labels(true);
    chart.set_has_labels_only_for_selected(true);
    assert!(!chart.has_labels());
    assert!(chart.has_labels_only_for_selected());

    chart.set_has_labels(true);
    assert!(chart.has_labels());
    assert!(!chart.has_labels_only_for_selected());
}

#[test]
fn slices_animate_through_update_and_finish() {
    let mut chart = sample_pie();

    chart.slices_mut()[0].set_target(60.0);
    chart.update(0.5);
    assert_eq!(chart.slices()[0].value(), 45.0);
    assert_eq!(chart.slices()[1].value(), 50.0);

    chart.finish();
    assert_eq!(chart.slices()[0].value(), 60.0);
}

#[test]
fn slice_darken_follows_color() {
    let violet = Color::rgb(0.5, 0.2, 0.9);
    let slice = SliceValue::new(10.0).with_color(violet);

    assert_eq!(slice.color(), violet);
    assert_eq!(slice.darken_color(), violet.darken());
}

#[test]
fn center_circle_and_texts_round_trip() {
    let mut chart = sample_pie();
    assert!(!chart.has_center_circle());

    chart.set_has_center_circle(true);
    chart.set_center_circle_scale(0.8);
    chart.set_center_text1(Some("87%".to_owned()));
    chart.set_center_text2(Some("battery".to_owned()));

    assert!(chart.has_center_circle());
    assert_eq!(chart.center_circle_scale(), 0.8);
    assert_eq!(chart.center_text1(), Some("87%"));
    assert_eq!(chart.center_text2(), Some("battery"));
}

#[test]
fn center_circle_scale_is_clamped() {
    let mut chart = sample_pie();
    chart.set_center_circle_scale(4.0);
    assert_eq!(chart.center_circle_scale(), 1.0);
}

#[test]
fn absent_formatter_keeps_previous() {
    let mut chart = sample_pie();
    chart.set_formatter(Some(ValueFormatter::new(1).with_suffix("%")));
    chart.set_formatter(None);
    assert_eq!(chart.formatter().format(42.5), "42.5%");
}

#[test]
fn clone_is_a_deep_copy() {
    let chart = sample_pie();
    let mut copy = chart.clone();

    copy.slices_mut()[1].set(99.0);
    assert_eq!(chart.slices()[1].value(), 50.0);
    assert_eq!(copy.slices()[1].value(), 99.0);
}

#[test]
fn slice_order_is_preserved() {
    let chart = sample_pie();
    let labels: Vec<Option<&str>> = chart.slices().iter().map(SliceValue::label).collect();
    assert_eq!(labels, vec![Some("rotor a"), Some("rotor b"), None]);
}
