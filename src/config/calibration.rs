//! Calibration constants relating physical units to raw timer ticks.
//!
//! The ramp formulas work in three coupled unit systems: motor steps, timer
//! ticks, and the caller's speed/acceleration units. The constants below tie
//! them together and were fitted against the reference drive (1.8° full-step
//! motor behind a 168 MHz advanced-timer prescaler chain). They are plain
//! `f32` so a different drive can override the two tunable ones through
//! [`MotionParameters`](super::MotionParameters).

use super::units::Degrees;

/// Full-step angle of the reference motor, in degrees per step.
pub const STEP_ANGLE_DEGREES: f32 = 1.8;

/// Per-step displacement constant `k` used by the phase-length formulas,
/// the step angle expressed in radians (1.8° ≈ 0.0314 rad).
///
/// Appears as `2·k` in the accel/decel step-count denominators and as a
/// factor of the cruise period.
pub const STEP_ANGLE_RADIANS: f32 = 0.0314;

/// Default `timer_scale_constant`: multiplier from the ramp square root to
/// raw timer ticks, fitted to the reference timer clock (0.676 × 10000 / 10).
pub const DEFAULT_TIMER_SCALE: f32 = 676.0;

/// Default `ramp_constant`: numerator under the square root of the initial
/// period formula `c0 = timer_scale · sqrt(ramp_constant / accel)`,
/// 2 × [`STEP_ANGLE_RADIANS`] × 100000.
pub const DEFAULT_RAMP_CONSTANT: f32 = 6280.0;

/// Convert an angular displacement to a whole step count.
///
/// Truncates toward zero, matching the reference implementation; a request
/// smaller than one step angle yields zero steps and is rejected by the
/// planner.
#[inline]
pub fn steps_for_angle(angle: Degrees) -> i32 {
    (angle.value() / STEP_ANGLE_DEGREES) as i32
}
