use serde::{Deserialize, Serialize};

use crate::core::animated::{AnimatedPoint, AnimatedScalar, AnimatedTriple};
use crate::core::color::{Color, DEFAULT_SERIES_COLOR};

/// Marker drawn at a data point by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PointShape {
    #[default]
    Circle,
    Square,
    Diamond,
}

/// Single animated sample of a line series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointValue {
    point: AnimatedPoint,
    label: Option<String>,
}

impl PointValue {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: AnimatedPoint::new(x, y),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x()
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.point.y()
    }

    #[must_use]
    pub fn target_x(&self) -> f64 {
        self.point.target_x()
    }

    #[must_use]
    pub fn target_y(&self) -> f64 {
        self.point.target_y()
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.point.set(x, y);
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.point.set_target(x, y);
    }

    pub fn update(&mut self, scale: f64) {
        self.point.update(scale);
    }

    pub fn finish(&mut self) {
        self.point.finish();
    }
}

/// Single animated sample of a bubble chart: x/y position plus z weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleValue {
    triple: AnimatedTriple,
    color: Color,
    darken_color: Color,
    shape: PointShape,
    label: Option<String>,
}

impl BubbleValue {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            triple: AnimatedTriple::new(x, y, z),
            color: DEFAULT_SERIES_COLOR,
            darken_color: DEFAULT_SERIES_COLOR.darken(),
            shape: PointShape::default(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.triple.x()
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.triple.y()
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.triple.z()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Highlight color; always derived from `color`, never set directly.
    #[must_use]
    pub fn darken_color(&self) -> Color {
        self.darken_color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.darken_color = color.darken();
    }

    #[must_use]
    pub fn shape(&self) -> PointShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: PointShape) {
        self.shape = shape;
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.triple.set(x, y, z);
    }

    pub fn set_target(&mut self, x: f64, y: f64, z: f64) {
        self.triple.set_target(x, y, z);
    }

    pub fn update(&mut self, scale: f64) {
        self.triple.update(scale);
    }

    pub fn finish(&mut self) {
        self.triple.finish();
    }
}

impl Default for BubbleValue {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Single animated wedge of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceValue {
    value: AnimatedScalar,
    color: Color,
    darken_color: Color,
    label: Option<String>,
}

impl SliceValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: AnimatedScalar::new(value),
            color: DEFAULT_SERIES_COLOR,
            darken_color: DEFAULT_SERIES_COLOR.darken(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.value()
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.value.target()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn darken_color(&self) -> Color {
        self.darken_color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.darken_color = color.darken();
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn set(&mut self, value: f64) {
        self.value.set(value);
    }

    pub fn set_target(&mut self, target: f64) {
        self.value.set_target(target);
    }

    pub fn update(&mut self, scale: f64) {
        self.value.update(scale);
    }

    pub fn finish(&mut self) {
        self.value.finish();
    }
}

impl Default for SliceValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Single animated segment of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcolumnValue {
    value: AnimatedScalar,
    color: Color,
    darken_color: Color,
    label: Option<String>,
}

impl SubcolumnValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value: AnimatedScalar::new(value),
            color: DEFAULT_SERIES_COLOR,
            darken_color: DEFAULT_SERIES_COLOR.darken(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.value()
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.value.target()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn darken_color(&self) -> Color {
        self.darken_color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.darken_color = color.darken();
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn set(&mut self, value: f64) {
        self.value.set(value);
    }

    pub fn set_target(&mut self, target: f64) {
        self.value.set_target(target);
    }

    pub fn update(&mut self, scale: f64) {
        self.value.update(scale);
    }

    pub fn finish(&mut self) {
        self.value.finish();
    }
}

impl Default for SubcolumnValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
