use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::model::chart_config::ChartConfig;
use crate::model::column::Column;

/// Fraction of the available slot each column fills when a host supplies
/// none.
pub const DEFAULT_FILL_RATIO: f64 = 0.75;

/// Baseline columns grow away from when a host supplies none.
pub const DEFAULT_BASE_VALUE: f64 = 0.0;

/// Data for a column chart: any number of columns over one shared
/// configuration.
///
/// `Clone` is a deep copy; every column and axis is owned by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnChartData {
    config: ChartConfig,
    columns: Vec<Column>,
    is_stacked: bool,
    fill_ratio: f64,
    base_value: f64,
}

impl ColumnChartData {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Whether subcolumn segments stack instead of drawing side by side.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.is_stacked
    }

    pub fn set_stacked(&mut self, is_stacked: bool) {
        self.is_stacked = is_stacked;
    }

    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.fill_ratio
    }

    /// Sets the slot fill ratio, clamped into `[0, 1]`.
    pub fn set_fill_ratio(&mut self, fill_ratio: f64) {
        self.fill_ratio = fill_ratio.clamp(0.0, 1.0);
    }

    #[must_use]
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    pub fn set_base_value(&mut self, base_value: f64) {
        self.base_value = base_value;
    }

    #[must_use]
    pub fn axis_x_bottom(&self) -> Option<&Axis> {
        self.config.axis_x_bottom.as_ref()
    }

    pub fn set_axis_x_bottom(&mut self, axis: Option<Axis>) {
        self.config.axis_x_bottom = axis;
    }

    #[must_use]
    pub fn axis_x_top(&self) -> Option<&Axis> {
        self.config.axis_x_top.as_ref()
    }

    pub fn set_axis_x_top(&mut self, axis: Option<Axis>) {
        self.config.axis_x_top = axis;
    }

    #[must_use]
    pub fn axis_y_left(&self) -> Option<&Axis> {
        self.config.axis_y_left.as_ref()
    }

    pub fn set_axis_y_left(&mut self, axis: Option<Axis>) {
        self.config.axis_y_left = axis;
    }

    #[must_use]
    pub fn axis_y_right(&self) -> Option<&Axis> {
        self.config.axis_y_right.as_ref()
    }

    pub fn set_axis_y_right(&mut self, axis: Option<Axis>) {
        self.config.axis_y_right = axis;
    }

    pub fn update(&mut self, scale: f64) {
        for column in &mut self.columns {
            column.update(scale);
        }
        self.config.update(scale);
    }

    pub fn finish(&mut self) {
        for column in &mut self.columns {
            column.finish();
        }
        self.config.finish();
    }
}

impl Default for ColumnChartData {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            columns: Vec::new(),
            is_stacked: false,
            fill_ratio: DEFAULT_FILL_RATIO,
            base_value: DEFAULT_BASE_VALUE,
        }
    }
}
