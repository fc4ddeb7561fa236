//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use std::path::PathBuf;

use crate::constants::noise;

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{name} must be between {min} and {max}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate a noise threshold in dB.
pub fn parse_noise(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, noise::MIN, noise::MAX, "noise")
}

/// Parse a strictly positive, finite number of seconds.
pub fn parse_positive_float(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("value must be a positive number, got {value}"));
    }

    Ok(value)
}

/// Parse a minimum clip duration; zero disables extension.
pub fn parse_min_duration(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, 0.0, f64::MAX, "minimum duration")
}

/// Parse an input path that must be an existing file.
pub fn parse_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if !path.exists() {
        return Err(format!("'{s}' does not exist"));
    }
    if !path.is_file() {
        return Err(format!("'{s}' is not a file"));
    }
    Ok(path)
}
