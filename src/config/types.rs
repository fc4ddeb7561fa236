//! Configuration type definitions.

use crate::constants::{
    DEFAULT_CLIP_EXTENSION, DEFAULT_MIN_DURATION, DEFAULT_NOISE_DB, DEFAULT_OUTPUT_SUFFIX,
    DEFAULT_SILENCE_DURATION, tools,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default cutting settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// External tool locations.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Output naming settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default cutting settings, overridable from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Noise threshold in dB.
    pub noise_db: f64,

    /// Minimum silence duration in seconds.
    pub silence_duration: f64,

    /// Minimum sounded segment duration in seconds.
    pub min_duration: f64,

    /// Stream-copy instead of re-encoding.
    pub copy: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            noise_db: DEFAULT_NOISE_DB,
            silence_duration: DEFAULT_SILENCE_DURATION,
            min_duration: DEFAULT_MIN_DURATION,
            copy: false,
        }
    }
}

/// External tool locations.
///
/// Bare names are looked up on `PATH`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// ffmpeg binary.
    pub ffmpeg: PathBuf,

    /// ffprobe binary.
    pub ffprobe: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from(tools::FFMPEG),
            ffprobe: PathBuf::from(tools::FFPROBE),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Suffix appended to the input stem for the default output file.
    pub suffix: String,

    /// Container extension for intermediate clips.
    pub clip_extension: String,

    /// Directory for intermediate clips (default: next to the output file).
    pub work_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            clip_extension: DEFAULT_CLIP_EXTENSION.to_string(),
            work_dir: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_config_default_values() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.noise_db, -30.0);
        assert_eq!(defaults.silence_duration, 1.0);
        assert_eq!(defaults.min_duration, 1.0);
        assert!(!defaults.copy);
    }

    #[test]
    fn test_output_config_default_values() {
        let output = OutputConfig::default();
        assert_eq!(output.suffix, "_cut");
        assert_eq!(output.clip_extension, "mts");
        assert!(output.work_dir.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[defaults]\ncopy = true\n").unwrap_or_default();
        assert!(config.defaults.copy);
        assert_eq!(config.defaults.noise_db, -30.0);
        assert_eq!(config.tools.ffmpeg, PathBuf::from("ffmpeg"));
    }
}
