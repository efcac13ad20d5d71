//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MotionParameters, SystemConfig};

/// Validate a system configuration.
///
/// Checks that every kinematic parameter and calibration constant is
/// strictly positive.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_parameters(&config.motion)
}

/// Validate motion parameters.
pub fn validate_parameters(params: &MotionParameters) -> Result<()> {
    if params.acceleration.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAcceleration(
            params.acceleration.0,
        )));
    }

    if params.deceleration.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidDeceleration(
            params.deceleration.0,
        )));
    }

    if params.cruise_speed.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidCruiseSpeed(
            params.cruise_speed.0,
        )));
    }

    if params.timer_scale_constant <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidTimerScale(
            params.timer_scale_constant,
        )));
    }

    if params.ramp_constant <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidRampConstant(
            params.ramp_constant,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{StepsPerSec, StepsPerSecSquared};

    fn make_params() -> MotionParameters {
        MotionParameters::new(
            StepsPerSecSquared::new(0.5),
            StepsPerSecSquared::new(0.5),
            StepsPerSec::new(20.0),
        )
    }

    #[test]
    fn test_valid_parameters() {
        assert!(validate_parameters(&make_params()).is_ok());
    }

    #[test]
    fn test_rejects_zero_acceleration() {
        let mut params = make_params();
        params.acceleration = StepsPerSecSquared::new(0.0);
        assert_eq!(
            validate_parameters(&params),
            Err(Error::Config(ConfigError::InvalidAcceleration(0.0)))
        );
    }

    #[test]
    fn test_rejects_negative_deceleration() {
        let mut params = make_params();
        params.deceleration = StepsPerSecSquared::new(-1.0);
        assert_eq!(
            validate_parameters(&params),
            Err(Error::Config(ConfigError::InvalidDeceleration(-1.0)))
        );
    }

    #[test]
    fn test_rejects_zero_cruise_speed() {
        let mut params = make_params();
        params.cruise_speed = StepsPerSec::new(0.0);
        assert!(validate_parameters(&params).is_err());
    }

    #[test]
    fn test_rejects_bad_calibration() {
        let mut params = make_params();
        params.timer_scale_constant = 0.0;
        assert!(validate_parameters(&params).is_err());

        let mut params = make_params();
        params.ramp_constant = -6280.0;
        assert!(validate_parameters(&params).is_err());
    }
}
