//! External media tool boundary.
//!
//! Everything that shells out lives behind [`MediaToolkit`] so the rest of the
//! pipeline can be driven by a fake in tests.

mod command;
mod ffmpeg;
mod probe;

use std::path::Path;

use crate::error::Result;

pub use command::{ToolCommand, ToolOutput, stderr_tail};
pub use ffmpeg::Ffmpeg;
pub use probe::parse_probe_duration;

/// Thresholds for the silence-detection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionSettings {
    /// Noise level in dB below which audio counts as silent.
    pub noise_db: f64,
    /// Minimum silence length in seconds.
    pub silence_duration: f64,
}

impl DetectionSettings {
    /// Render the `silencedetect` audio filter expression.
    pub fn filter(&self) -> String {
        format!(
            "silencedetect=n={}dB:d={}",
            self.noise_db, self.silence_duration
        )
    }
}

/// Synchronous interface to the external media tools.
pub trait MediaToolkit {
    /// Total duration of `source` in seconds.
    fn probe_duration(&self, source: &Path) -> Result<f64>;

    /// Run silence detection over `source` and return the raw detector log.
    fn detect_silence(&self, source: &Path, settings: &DetectionSettings) -> Result<String>;

    /// Write `[start, end]` of `source` to `output`.
    ///
    /// `output_id` names the segment in errors. With `copy`, streams are
    /// copied instead of re-encoded.
    fn extract_range(
        &self,
        source: &Path,
        start: f64,
        end: f64,
        copy: bool,
        output_id: &str,
        output: &Path,
    ) -> Result<()>;

    /// Join the clips listed in `manifest`, in order, into `output`.
    fn concatenate(&self, manifest: &Path, copy: bool, output: &Path) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_filter() {
        let settings = DetectionSettings {
            noise_db: -30.0,
            silence_duration: 1.0,
        };
        assert_eq!(settings.filter(), "silencedetect=n=-30dB:d=1");
    }

    #[test]
    fn test_detection_filter_fractional() {
        let settings = DetectionSettings {
            noise_db: -42.5,
            silence_duration: 1.25,
        };
        assert_eq!(settings.filter(), "silencedetect=n=-42.5dB:d=1.25");
    }
}
