//! Motion module for step-ramp.
//!
//! Provides profile planning and per-tick step sequencing.

mod planner;
pub mod sequencer;
mod state;

pub use planner::{MotionPlan, ProfileShape};
pub use sequencer::TickOutcome;
pub use state::{MotionPhase, MotionState};
