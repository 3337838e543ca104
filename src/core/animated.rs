//! Interpolation primitives behind every animated chart value.
//!
//! A value owns its origin, its currently displayed value, and the delta to
//! the transition target. The engine has no clock: an external driver
//! supplies a dimensionless scale factor each tick and calls `finish` when
//! the transition ends. Retargeting mid-flight re-bases the origin to the
//! displayed value, so redirected transitions never jump.

use serde::{Deserialize, Serialize};

/// One-dimensional animated value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimatedScalar {
    value: f64,
    origin: f64,
    diff: f64,
}

impl AnimatedScalar {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            origin: value,
            diff: 0.0,
        }
    }

    /// Currently displayed value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Value at the start of the current transition.
    #[must_use]
    pub fn origin(self) -> f64 {
        self.origin
    }

    /// Remaining signed distance of the current transition.
    #[must_use]
    pub fn diff(self) -> f64 {
        self.diff
    }

    /// Value the in-flight transition lands on.
    #[must_use]
    pub fn target(self) -> f64 {
        self.origin + self.diff
    }

    /// Assigns synchronously; no transition remains in progress afterward.
    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.origin = value;
        self.diff = 0.0;
    }

    /// Starts (or redirects) a transition toward `target`.
    ///
    /// The origin re-bases to the currently displayed value, not the
    /// previous origin, so calling this mid-flight never moves `value`.
    pub fn set_target(&mut self, target: f64) {
        self.origin = self.value;
        self.diff = target - self.value;
    }

    /// Advances the displayed value to `origin + diff * scale`.
    ///
    /// The scale is not clamped; callers drive it through `[0, 1]` and an
    /// out-of-range scale extrapolates.
    pub fn update(&mut self, scale: f64) {
        self.value = self.origin + self.diff * scale;
    }

    /// Snaps to the target and collapses the transition, so a later
    /// `update` with a stale scale cannot overshoot.
    pub fn finish(&mut self) {
        self.value = self.origin + self.diff;
        self.origin = self.value;
        self.diff = 0.0;
    }
}

/// Two independent scalars sharing one transition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimatedPoint {
    x: AnimatedScalar,
    y: AnimatedScalar,
}

impl AnimatedPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: AnimatedScalar::new(x),
            y: AnimatedScalar::new(y),
        }
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x.value()
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y.value()
    }

    #[must_use]
    pub fn target_x(self) -> f64 {
        self.x.target()
    }

    #[must_use]
    pub fn target_y(self) -> f64 {
        self.y.target()
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x.set(x);
        self.y.set(y);
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
    }

    pub fn update(&mut self, scale: f64) {
        self.x.update(scale);
        self.y.update(scale);
    }

    pub fn finish(&mut self) {
        self.x.finish();
        self.y.finish();
    }
}

/// Three independent scalars sharing one transition lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimatedTriple {
    x: AnimatedScalar,
    y: AnimatedScalar,
    z: AnimatedScalar,
}

impl AnimatedTriple {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: AnimatedScalar::new(x),
            y: AnimatedScalar::new(y),
            z: AnimatedScalar::new(z),
        }
    }

    #[must_use]
    pub fn x(self) -> f64 {
        self.x.value()
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.y.value()
    }

    #[must_use]
    pub fn z(self) -> f64 {
        self.z.value()
    }

    #[must_use]
    pub fn target_x(self) -> f64 {
        self.x.target()
    }

    #[must_use]
    pub fn target_y(self) -> f64 {
        self.y.target()
    }

    #[must_use]
    pub fn target_z(self) -> f64 {
        self.z.target()
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x.set(x);
        self.y.set(y);
        self.z.set(z);
    }

    pub fn set_target(&mut self, x: f64, y: f64, z: f64) {
        self.x.set_target(x);
        self.y.set_target(y);
        self.z.set_target(z);
    }

    pub fn update(&mut self, scale: f64) {
        self.x.update(scale);
        self.y.update(scale);
        self.z.update(scale);
    }

    pub fn finish(&mut self) {
        self.x.finish();
        self.y.finish();
        self.z.finish();
    }
}
