//! chartmotion: renderer-agnostic chart data and animation model.
//!
//! This crate owns chart series data (line/column/pie/bubble/combo),
//! advances value transitions from an externally supplied scale factor,
//! and tracks the visible data-space viewport and user selection. It never
//! draws, never owns a clock, and never blocks: a host renderer reads the
//! current state each frame, and a host driver mutates it in response to
//! new data or user interaction.

pub mod core;
pub mod error;
pub mod model;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use model::{
    BubbleChartData, ColumnChartData, ComboLineColumnChartData, LineChartData, PieChartData,
    SelectedValue, SelectedValueType,
};
