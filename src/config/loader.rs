//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use step_ramp::load_config;
///
/// let config = load_config("motion.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::calibration::{DEFAULT_RAMP_CONSTANT, DEFAULT_TIMER_SCALE};

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motion]
acceleration = 0.5
deceleration = 0.5
cruise_speed = 20.0
"#;

        let config = parse_config(toml).unwrap();
        assert!((config.motion.acceleration.0 - 0.5).abs() < f32::EPSILON);
        // Calibration falls back to the fitted defaults
        assert!((config.motion.timer_scale_constant - DEFAULT_TIMER_SCALE).abs() < f32::EPSILON);
        assert!((config.motion.ramp_constant - DEFAULT_RAMP_CONSTANT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_with_calibration_override() {
        let toml = r#"
[motion]
acceleration = 500.0
deceleration = 200.0
cruise_speed = 800.0
timer_scale_constant = 1000.0
ramp_constant = 3600.0
"#;

        let config = parse_config(toml).unwrap();
        assert!((config.motion.timer_scale_constant - 1000.0).abs() < f32::EPSILON);
        assert!((config.motion.ramp_constant - 3600.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_rejects_invalid_parameters() {
        let toml = r#"
[motion]
acceleration = 0.0
deceleration = 0.5
cruise_speed = 20.0
"#;

        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        assert!(parse_config("[motion").is_err());
    }
}
