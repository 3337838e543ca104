//! Chart aggregates: animated value wrappers, series containers, and the
//! per-kind chart data variants an external renderer reads each frame.

pub mod bubble_chart;
pub mod chart_config;
pub mod column;
pub mod column_chart;
pub mod combo_chart;
pub mod line;
pub mod line_chart;
pub mod pie_chart;
pub mod selection;
pub mod values;

pub use bubble_chart::BubbleChartData;
pub use chart_config::ChartConfig;
pub use column::Column;
pub use column_chart::ColumnChartData;
pub use combo_chart::ComboLineColumnChartData;
pub use line::Line;
pub use line_chart::LineChartData;
pub use pie_chart::PieChartData;
pub use selection::{SelectedValue, SelectedValueType};
pub use values::{BubbleValue, PointShape, PointValue, SliceValue, SubcolumnValue};

#[cfg(feature = "parallel-update")]
use rayon::prelude::*;

/// Applies `apply` to every member of a series, in parallel when the
/// `parallel-update` feature is enabled. Members are independent, so the
/// result is identical either way.
pub(crate) fn for_each_value<T, F>(values: &mut [T], apply: F)
where
    T: Send,
    F: Fn(&mut T) + Send + Sync,
{
    #[cfg(feature = "parallel-update")]
    values.par_iter_mut().for_each(|value| apply(value));

    #[cfg(not(feature = "parallel-update"))]
    for value in values {
        apply(value);
    }
}
