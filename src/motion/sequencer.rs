//! Per-tick step sequencing.
//!
//! One call of [`advance`] per timing-source event. The period update is
//! the discrete approximation of a `1/sqrt(t)` speed ramp: pure arithmetic
//! on the stored period, no transcendental calls, safe inside a hard
//! real-time tick handler.

use super::planner::MotionPlan;
use super::state::{MotionPhase, MotionState};

/// Result of one sequencer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Keep stepping; the timing source must be reprogrammed with this
    /// period (in raw timer ticks) before its next event.
    Continue(u32),
    /// Target step count reached; the timing source must stop.
    Complete,
}

/// Advance the move by one step.
///
/// Determines the active phase from `steps_executed` against the plan's
/// boundaries, updates the period with the matching recurrence, and
/// increments the step counter. The recurrence reads the period and step
/// index from before the increment.
pub fn advance(plan: &MotionPlan, state: &mut MotionState) -> TickOutcome {
    if state.steps_executed >= plan.total_steps {
        state.phase = MotionPhase::Done;
        return TickOutcome::Complete;
    }

    let step = state.steps_executed;

    if step <= plan.accel_steps {
        state.phase = MotionPhase::Accelerating;
        state.current_period -= (2.0 * state.current_period) / (4.0 * step as f32 + 1.0);
    } else if step <= plan.accel_steps + plan.cruise_steps {
        // Hold the period the acceleration ramp converged to
        state.phase = MotionPhase::Cruising;
    } else {
        state.phase = MotionPhase::Decelerating;
        // decel_remaining stays >= 1 at every read: the planner guarantees
        // decel_steps >= 1 and this branch runs decel_steps - 1 times
        state.current_period +=
            (2.0 * state.current_period) / (4.0 * state.decel_remaining as f32 - 1.0);
        state.decel_remaining -= 1;
    }

    state.steps_executed += 1;
    TickOutcome::Continue(state.current_period as u32)
}
