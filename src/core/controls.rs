//! Declared ranges and defaults of the four input controls.

use crate::core::error::{Result, RocketError};
use crate::core::motion::{SceneParameters, T_MAX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

pub const INITIAL_HEIGHT: ControlRange = ControlRange {
    label: "Initial height, c (m)",
    min: 0.0,
    max: 50.0,
    step: 1.0,
    default: 10.0,
};

pub const INITIAL_VELOCITY: ControlRange = ControlRange {
    label: "Initial upward velocity, b",
    min: 5.0,
    max: 40.0,
    step: 1.0,
    default: 20.0,
};

pub const TIME: ControlRange = ControlRange {
    label: "Time (seconds)",
    min: 0.0,
    max: T_MAX,
    step: 0.1,
    default: 0.0,
};

impl ControlRange {
    /// Clamps a raw widget value and rounds it to the control's step.
    pub fn snap(&self, raw: f64) -> f64 {
        // Dividing by the reciprocal lands on `k / 10` exactly for a 0.1 step,
        // where `k * 0.1` does not.
        let per_unit = self.step.recip();
        let steps = ((raw.clamp(self.min, self.max) - self.min) * per_unit).round();
        // Re-clamp: rounding can step past `max` when the span is not a
        // whole number of steps.
        (self.min + steps / per_unit).clamp(self.min, self.max)
    }

    /// Accepts values inside the range only. Used by inputs that are not
    /// bounded by a widget.
    pub fn check(&self, value: f64) -> Result<f64> {
        if !value.is_finite() || value < self.min || value > self.max {
            return Err(RocketError::OutOfRange {
                label: self.label,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

/// Current values of every control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlValues {
    pub initial_height: f64,
    pub initial_velocity: f64,
    pub animate: bool,
    pub time_s: f64,
}

impl ControlValues {
    pub fn scene_params(&self) -> SceneParameters {
        SceneParameters::new(self.initial_height, self.initial_velocity)
    }

    pub fn snapped(self) -> Self {
        Self {
            initial_height: INITIAL_HEIGHT.snap(self.initial_height),
            initial_velocity: INITIAL_VELOCITY.snap(self.initial_velocity),
            time_s: TIME.snap(self.time_s),
            ..self
        }
    }
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            initial_height: INITIAL_HEIGHT.default,
            initial_velocity: INITIAL_VELOCITY.default,
            animate: false,
            time_s: TIME.default,
        }
    }
}
