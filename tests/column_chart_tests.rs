use chartmotion_rs::core::{Color, ValueFormatter};
use chartmotion_rs::model::{Column, ColumnChartData, SubcolumnValue};

fn sample_columns() -> Vec<Column> {
    (0..3)
        .map(|i| {
            Column::new(vec![
                SubcolumnValue::new(f64::from(i) + 1.0),
                SubcolumnValue::new(f64::from(i) + 2.0),
            ])
        })
        .collect()
}

#[test]
fn label_flags_are_mutually_exclusive() {
    let mut column = Column::default();

    column.set_has_labels(true);
    column.set_has_labels_only_for_selected(true);
    assert!(!column.has_labels());
    assert!(column.has_labels_only_for_selected());

    column.set_has_labels(true);
    assert!(column.has_labels());
    assert!(!column.has_labels_only_for_selected());
}

#[test]
fn fill_ratio_is_clamped() {
    let mut chart = ColumnChartData::default();
    assert_eq!(chart.fill_ratio(), 0.75);

    chart.set_fill_ratio(2.0);
    assert_eq!(chart.fill_ratio(), 1.0);

    chart.set_fill_ratio(-0.5);
    assert_eq!(chart.fill_ratio(), 0.0);

    chart.set_fill_ratio(0.4);
    assert_eq!(chart.fill_ratio(), 0.4);
}

#[test]
fn update_reaches_every_subcolumn() {
    let mut chart = ColumnChartData::new(sample_columns());

    let initial: Vec<Vec<f64>> = chart
        .columns()
        .iter()
        .map(|column| column.values().iter().map(SubcolumnValue::value).collect())
        .collect();

    for column in chart.columns_mut() {
        for value in column.values_mut() {
            value.set_target(10.0);
        }
    }

    chart.update(0.5);
    for (column, starts) in chart.columns().iter().zip(&initial) {
        for (value, start) in column.values().iter().zip(starts) {
            assert_eq!(value.value(), (start + 10.0) / 2.0);
        }
    }
}

#[test]
fn finish_snaps_every_subcolumn_to_target() {
    let mut chart = ColumnChartData::new(sample_columns());

    for column in chart.columns_mut() {
        for value in column.values_mut() {
            value.set_target(7.0);
        }
    }

    chart.finish();
    for column in chart.columns() {
        for value in column.values() {
            assert_eq!(value.value(), 7.0);
        }
    }
}

#[test]
fn subcolumn_darken_follows_color() {
    let mut value = SubcolumnValue::new(1.0);
    let orange = Color::rgb(1.0, 0.6, 0.0);

    value.set_color(orange);
    assert_eq!(value.color(), orange);
    assert_eq!(value.darken_color(), orange.darken());
}

#[test]
fn stacked_flag_round_trips() {
    let mut chart = ColumnChartData::default();
    assert!(!chart.is_stacked());
    chart.set_stacked(true);
    assert!(chart.is_stacked());
}

#[test]
fn absent_formatter_keeps_previous() {
    let mut column = Column::default();
    column.set_formatter(Some(ValueFormatter::new(1)));
    column.set_formatter(None);
    assert_eq!(column.formatter().decimal_digits(), 1);
}

#[test]
fn clone_is_a_deep_copy() {
    let chart = ColumnChartData::new(sample_columns());
    let mut copy = chart.clone();

    copy.columns_mut()[0].values_mut()[0].set(42.0);
    assert_eq!(chart.columns()[0].values()[0].value(), 1.0);
    assert_eq!(copy.columns()[0].values()[0].value(), 42.0);
}
