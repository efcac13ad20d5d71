//! Configuration module for step-ramp.
//!
//! Provides types for loading and validating motion parameters from TOML
//! files (with `std` feature) or pre-parsed data, plus the calibration
//! constants relating physical units to raw timer ticks.

pub mod calibration;
#[cfg(feature = "std")]
mod loader;
mod motion;
pub mod units;
mod validation;

pub use motion::{MotionParameters, SystemConfig};
pub use validation::{validate_config, validate_parameters};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, StepsPerSec, StepsPerSecSquared};
