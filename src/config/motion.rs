//! Motion parameter configuration from TOML.

use serde::Deserialize;

use super::calibration::{DEFAULT_RAMP_CONSTANT, DEFAULT_TIMER_SCALE};
use super::units::{StepsPerSec, StepsPerSecSquared};

/// Kinematic parameters for one axis, read-only during a move.
///
/// Loaded from the `[motion]` table of a TOML file or built directly.
/// All fields must be strictly positive; see
/// [`validate_parameters`](super::validate_parameters).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionParameters {
    /// Acceleration in steps/s².
    pub acceleration: StepsPerSecSquared,

    /// Deceleration in steps/s².
    pub deceleration: StepsPerSecSquared,

    /// Cruise (target) speed in steps/s.
    pub cruise_speed: StepsPerSec,

    /// Multiplier from ramp units to raw timer ticks.
    #[serde(default = "default_timer_scale")]
    pub timer_scale_constant: f32,

    /// Numerator under the square root of the initial-period formula.
    #[serde(default = "default_ramp_constant")]
    pub ramp_constant: f32,
}

fn default_timer_scale() -> f32 {
    DEFAULT_TIMER_SCALE
}

fn default_ramp_constant() -> f32 {
    DEFAULT_RAMP_CONSTANT
}

impl MotionParameters {
    /// Create parameters with the default timer calibration.
    pub fn new(
        acceleration: StepsPerSecSquared,
        deceleration: StepsPerSecSquared,
        cruise_speed: StepsPerSec,
    ) -> Self {
        Self {
            acceleration,
            deceleration,
            cruise_speed,
            timer_scale_constant: DEFAULT_TIMER_SCALE,
            ramp_constant: DEFAULT_RAMP_CONSTANT,
        }
    }
}

/// Complete system configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SystemConfig {
    /// Kinematic parameters for the axis.
    pub motion: MotionParameters,
}
