//! Error types for the step-ramp library.
//!
//! Provides unified error handling across configuration and motion planning.

use core::fmt;

use crate::motion::MotionPhase;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all step-ramp operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motion planning error
    Plan(PlanError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid acceleration (must be > 0)
    InvalidAcceleration(f32),
    /// Invalid deceleration (must be > 0)
    InvalidDeceleration(f32),
    /// Invalid cruise speed (must be > 0)
    InvalidCruiseSpeed(f32),
    /// Invalid timer scale constant (must be > 0)
    InvalidTimerScale(f32),
    /// Invalid ramp constant (must be > 0)
    InvalidRampConstant(f32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motion planning errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanError {
    /// The requested move cannot produce a valid profile.
    InvalidMove(InvalidMoveReason),
    /// A move is already in progress; call `abort_move` first to preempt it.
    Busy {
        /// Phase the active move was in when the request arrived
        phase: MotionPhase,
    },
}

/// Why a requested move was rejected as invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidMoveReason {
    /// Requested step count is zero or negative
    NonPositiveStepCount(i32),
    /// Acceleration parameter is zero or negative
    NonPositiveAcceleration(f32),
    /// Deceleration parameter is zero or negative
    NonPositiveDeceleration(f32),
    /// Cruise speed parameter is zero or negative
    NonPositiveCruiseSpeed(f32),
    /// Timer scale constant is zero or negative
    NonPositiveTimerScale(f32),
    /// Ramp constant is zero or negative
    NonPositiveRampConstant(f32),
    /// The planned deceleration phase would contain no steps, which would
    /// drive the deceleration recurrence denominator non-positive
    EmptyDecelPhase {
        /// Total step count of the rejected plan
        total_steps: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Plan(e) => write!(f, "Planning error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidAcceleration(v) => {
                write!(f, "Invalid acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidDeceleration(v) => {
                write!(f, "Invalid deceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidCruiseSpeed(v) => {
                write!(f, "Invalid cruise speed: {}. Must be > 0", v)
            }
            ConfigError::InvalidTimerScale(v) => {
                write!(f, "Invalid timer scale constant: {}. Must be > 0", v)
            }
            ConfigError::InvalidRampConstant(v) => {
                write!(f, "Invalid ramp constant: {}. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            PlanError::Busy { phase } => {
                write!(f, "Move already in progress (phase: {:?})", phase)
            }
        }
    }
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::NonPositiveStepCount(n) => {
                write!(f, "requested step count {} must be > 0", n)
            }
            InvalidMoveReason::NonPositiveAcceleration(v) => {
                write!(f, "acceleration {} must be > 0", v)
            }
            InvalidMoveReason::NonPositiveDeceleration(v) => {
                write!(f, "deceleration {} must be > 0", v)
            }
            InvalidMoveReason::NonPositiveCruiseSpeed(v) => {
                write!(f, "cruise speed {} must be > 0", v)
            }
            InvalidMoveReason::NonPositiveTimerScale(v) => {
                write!(f, "timer scale constant {} must be > 0", v)
            }
            InvalidMoveReason::NonPositiveRampConstant(v) => {
                write!(f, "ramp constant {} must be > 0", v)
            }
            InvalidMoveReason::EmptyDecelPhase { total_steps } => {
                write!(
                    f,
                    "deceleration phase of a {}-step move planned as empty",
                    total_steps
                )
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PlanError> for Error {
    fn from(e: PlanError) -> Self {
        Error::Plan(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PlanError {}
