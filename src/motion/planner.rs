//! Motion profile planning.
//!
//! Converts kinematic parameters and a requested displacement into phase
//! boundaries and timer periods. Runs once per move; the per-tick work
//! happens in [`sequencer`](super::sequencer).

use libm::sqrtf;

use crate::config::calibration::STEP_ANGLE_RADIANS;
use crate::config::MotionParameters;
use crate::error::{InvalidMoveReason, PlanError};

/// Shape of a planned velocity profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileShape {
    /// Speed rises then immediately falls; no cruise phase.
    Triangular,
    /// Accelerate, cruise at constant speed, decelerate.
    Trapezoidal,
}

/// Computed profile for one move.
///
/// Invariant: `accel_steps + cruise_steps + decel_steps == total_steps`,
/// `cruise_steps == 0` for triangular shapes, and `decel_steps >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionPlan {
    /// Total steps to execute.
    pub total_steps: u32,

    /// Triangular or trapezoidal.
    pub shape: ProfileShape,

    /// Steps in the acceleration phase.
    pub accel_steps: u32,

    /// Steps in the cruise phase (zero if triangular).
    pub cruise_steps: u32,

    /// Steps in the deceleration phase.
    pub decel_steps: u32,

    /// First step period `c0` in raw timer ticks (longest period, lowest
    /// speed).
    pub initial_period: f32,

    /// Nominal cruise period `cm` for the target speed. The running period
    /// during cruise is whatever the acceleration recurrence converged to;
    /// this field reports the target for telemetry.
    pub cruise_period: f32,
}

impl MotionPlan {
    /// Plan a move of `requested_steps` steps under `params`.
    ///
    /// Computes the theoretical full-speed accel/decel step counts
    /// `n1 = v²/(2·k·a)` and `n2 = v²/(2·k·d)`; if together they exceed the
    /// requested displacement the profile is triangular and the
    /// accel/decel boundary is recomputed to land on the target with zero
    /// final speed.
    ///
    /// # Errors
    ///
    /// Rejects non-positive step counts, kinematic parameters, and
    /// calibration constants, and any plan whose deceleration phase would
    /// be empty.
    pub fn compute(params: &MotionParameters, requested_steps: i32) -> Result<Self, PlanError> {
        if requested_steps <= 0 {
            return Err(PlanError::InvalidMove(
                InvalidMoveReason::NonPositiveStepCount(requested_steps),
            ));
        }

        let accel = params.acceleration.0;
        let decel = params.deceleration.0;
        let speed = params.cruise_speed.0;

        if accel <= 0.0 {
            return Err(PlanError::InvalidMove(
                InvalidMoveReason::NonPositiveAcceleration(accel),
            ));
        }
        if decel <= 0.0 {
            return Err(PlanError::InvalidMove(
                InvalidMoveReason::NonPositiveDeceleration(decel),
            ));
        }
        if speed <= 0.0 {
            return Err(PlanError::InvalidMove(
                InvalidMoveReason::NonPositiveCruiseSpeed(speed),
            ));
        }
        if params.timer_scale_constant <= 0.0 {
            return Err(PlanError::InvalidMove(
                InvalidMoveReason::NonPositiveTimerScale(params.timer_scale_constant),
            ));
        }
        if params.ramp_constant <= 0.0 {
            return Err(PlanError::InvalidMove(
                InvalidMoveReason::NonPositiveRampConstant(params.ramp_constant),
            ));
        }

        let total_steps = requested_steps as u32;

        // Period of the very first step
        let initial_period = params.timer_scale_constant * sqrtf(params.ramp_constant / accel);

        // Theoretical step counts to reach and leave cruise speed
        let n1 = speed * speed / (2.0 * STEP_ANGLE_RADIANS * accel);
        let n2 = speed * speed / (2.0 * STEP_ANGLE_RADIANS * decel);

        let cruise_period = 10.0 * STEP_ANGLE_RADIANS * params.timer_scale_constant / speed;

        if n1 + n2 >= total_steps as f32 {
            // Cruise speed is unreachable; switch from acceleration to
            // deceleration at the step that lands exactly on the target
            let accel_steps = (decel * total_steps as f32 / (accel + decel)) as u32;
            let decel_steps = total_steps - accel_steps;

            if decel_steps == 0 {
                return Err(PlanError::InvalidMove(InvalidMoveReason::EmptyDecelPhase {
                    total_steps,
                }));
            }

            Ok(Self {
                total_steps,
                shape: ProfileShape::Triangular,
                accel_steps,
                cruise_steps: 0,
                decel_steps,
                initial_period,
                cruise_period,
            })
        } else {
            let accel_steps = n1 as u32;
            let decel_steps = n2 as u32;

            if decel_steps == 0 {
                return Err(PlanError::InvalidMove(InvalidMoveReason::EmptyDecelPhase {
                    total_steps,
                }));
            }

            let cruise_steps = total_steps - accel_steps - decel_steps;

            Ok(Self {
                total_steps,
                shape: ProfileShape::Trapezoidal,
                accel_steps,
                cruise_steps,
                decel_steps,
                initial_period,
                cruise_period,
            })
        }
    }
}
