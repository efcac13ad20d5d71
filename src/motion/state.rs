//! Runtime motion state.

use super::planner::MotionPlan;

/// Current phase of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// No move planned.
    Idle,
    /// Speeding up from rest toward cruise speed.
    Accelerating,
    /// Holding the current step period (trapezoidal profiles only).
    Cruising,
    /// Slowing down toward rest.
    Decelerating,
    /// Target step count reached; no further ticks are consumed.
    Done,
}

/// State mutated on every timer tick while a move is active.
///
/// Created by the planner at move start, mutated exclusively by the
/// sequencer, terminal once `phase` reaches [`MotionPhase::Done`]. `Copy`
/// so callers get a detached snapshot for telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionState {
    /// Current phase.
    pub phase: MotionPhase,

    /// Steps executed so far (the first armed period counts as step 1).
    pub steps_executed: u32,

    /// Current step period in raw timer ticks.
    pub current_period: f32,

    /// Deceleration steps left; denominator term of the deceleration
    /// recurrence, counting down from the planned decel step count.
    pub decel_remaining: u32,
}

impl MotionState {
    /// State with no move planned.
    pub const fn idle() -> Self {
        Self {
            phase: MotionPhase::Idle,
            steps_executed: 0,
            current_period: 0.0,
            decel_remaining: 0,
        }
    }

    /// Initial state for a freshly planned move.
    pub fn start_of(plan: &MotionPlan) -> Self {
        Self {
            phase: MotionPhase::Accelerating,
            steps_executed: 1,
            current_period: plan.initial_period,
            decel_remaining: plan.decel_steps,
        }
    }

    /// Whether a move is currently in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            MotionPhase::Accelerating | MotionPhase::Cruising | MotionPhase::Decelerating
        )
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::idle()
    }
}
