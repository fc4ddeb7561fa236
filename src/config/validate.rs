//! Configuration validation.

use crate::config::Config;
use crate::constants::noise;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    validate_noise(defaults.noise_db)?;

    if !defaults.silence_duration.is_finite() || defaults.silence_duration <= 0.0 {
        return Err(Error::ConfigValidation {
            message: format!(
                "silence_duration must be positive, got {}",
                defaults.silence_duration
            ),
        });
    }

    validate_min_duration(defaults.min_duration)?;

    if config.output.clip_extension.is_empty()
        || config.output.clip_extension.contains(['/', '\\', '.'])
    {
        return Err(Error::ConfigValidation {
            message: format!(
                "clip_extension must be a bare extension like \"mts\", got \"{}\"",
                config.output.clip_extension
            ),
        });
    }

    Ok(())
}

/// Validate a noise threshold in dB.
pub fn validate_noise(noise_db: f64) -> Result<()> {
    if !(noise::MIN..=noise::MAX).contains(&noise_db) {
        return Err(Error::ConfigValidation {
            message: format!(
                "noise_db must be between {} and {}, got {noise_db}",
                noise::MIN,
                noise::MAX
            ),
        });
    }
    Ok(())
}

/// Validate a minimum sounded-segment duration.
pub fn validate_min_duration(min_duration: f64) -> Result<()> {
    if !min_duration.is_finite() || min_duration < 0.0 {
        return Err(Error::ConfigValidation {
            message: format!("min_duration must be non-negative, got {min_duration}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_noise_out_of_range() {
        let mut config = Config::default();
        config.defaults.noise_db = 5.0;
        assert!(validate_config(&config).is_err());
        config.defaults.noise_db = -200.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_silence_duration() {
        let mut config = Config::default();
        config.defaults.silence_duration = 0.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_negative_min_duration() {
        let mut config = Config::default();
        config.defaults.min_duration = -1.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_min_duration_allowed() {
        let mut config = Config::default();
        config.defaults.min_duration = 0.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_bad_clip_extension() {
        let mut config = Config::default();
        config.output.clip_extension = ".mts".to_string();
        assert!(validate_config(&config).is_err());
        config.output.clip_extension = String::new();
        assert!(validate_config(&config).is_err());
    }
}
