//! # step-ramp
//!
//! Non-blocking trapezoidal velocity ramps for timer-driven stepper motors.
//!
//! ## Features
//!
//! - **Event-driven**: no loop or thread owns a move; a hardware timer
//!   callback drives every step
//! - **Trapezoidal and triangular profiles**: the cruise phase drops out
//!   automatically when the displacement is too short
//! - **Asymmetric ramps**: independent acceleration and deceleration rates
//! - **Constant-time ticks**: the per-step period recurrence is pure
//!   arithmetic, fit for a hard real-time interrupt handler
//! - **no_std compatible**: core library works without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use step_ramp::{Degrees, MotionController, TickOutcome};
//!
//! // Load kinematic parameters from TOML
//! let config = step_ramp::load_config("motion.toml")?;
//!
//! // Bind the controller to the platform timer
//! let mut controller = MotionController::new(config.motion, timer);
//!
//! // Begin a move (non-blocking; arms the timer and returns)
//! controller.plan_move_degrees(Degrees::new(90.0))?;
//!
//! // From the timer interrupt:
//! match controller.on_tick() {
//!     TickOutcome::Continue(_period) => {}
//!     TickOutcome::Complete => { /* move finished */ }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod controller;
pub mod error;
pub mod motion;

// Re-exports for ergonomic API
pub use config::{validate_config, validate_parameters, MotionParameters, SystemConfig};
pub use controller::{MotionController, StepTimer};
pub use error::{Error, InvalidMoveReason, PlanError, Result};
pub use motion::{MotionPhase, MotionPlan, MotionState, ProfileShape, TickOutcome};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, StepsPerSec, StepsPerSecSquared};
