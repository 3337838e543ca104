use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::model::chart_config::ChartConfig;
use crate::model::column_chart::ColumnChartData;
use crate::model::line_chart::LineChartData;

/// Data for a combined column + line chart.
///
/// Owns one column dataset and one line dataset and fans `update`/`finish`
/// out to both. The combo keeps its own shared configuration; the nested
/// datasets keep theirs, which the renderer ignores in combo mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComboLineColumnChartData {
    config: ChartConfig,
    column_data: ColumnChartData,
    line_data: LineChartData,
}

impl ComboLineColumnChartData {
    #[must_use]
    pub fn new(column_data: ColumnChartData, line_data: LineChartData) -> Self {
        Self {
            config: ChartConfig::default(),
            column_data,
            line_data,
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
    pub fn column_data(&self) -> &ColumnChartData {
        &self.column_data
    }

    #[must_use]
    pub fn column_data_mut(&mut self) -> &mut ColumnChartData {
        &mut self.column_data
    }

    pub fn set_column_data(&mut self, column_data: ColumnChartData) {
        self.column_data = column_data;
    }

    #[must_use]
    pub fn line_data(&self) -> &LineChartData {
        &self.line_data
    }

    #[must_use]
    pub fn line_data_mut(&mut self) -> &mut LineChartData {
        &mut self.line_data
    }

    pub fn set_line_data(&mut self, line_data: LineChartData) {
        self.line_data = line_data;
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
        self.column_data.update(scale);
        self.line_data.update(scale);
        self.config.update(scale);
    }

    pub fn finish(&mut self) {
        self.column_data.finish();
        self.line_data.finish();
        self.config.finish();
    }
}
