use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::model::chart_config::ChartConfig;
use crate::model::line::Line;

/// Baseline for filled areas when a host supplies none.
pub const DEFAULT_BASE_VALUE: f64 = 0.0;

/// Data for a line chart: any number of lines over one shared
/// configuration.
///
/// `Clone` is a deep copy; every line and axis is owned by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartData {
    config: ChartConfig,
    lines: Vec<Line>,
    base_value: f64,
}

impl LineChartData {
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
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
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<Line>) {
        self.lines = lines;
    }

    /// Y value filled areas extend down (or up) to.
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
        for line in &mut self.lines {
            line.update(scale);
        }
        self.config.update(scale);
    }

    pub fn finish(&mut self) {
        for line in &mut self.lines {
            line.finish();
        }
        self.config.finish();
    }
}

impl Default for LineChartData {
    fn default() -> Self {
        Self {
            config: ChartConfig::default(),
            lines: Vec::new(),
            base_value: DEFAULT_BASE_VALUE,
        }
    }
}
