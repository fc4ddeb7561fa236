//! ffmpeg/ffprobe implementation of [`MediaToolkit`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::TIMESTAMP_PRECISION;
use crate::error::{Error, Result};

use super::{DetectionSettings, MediaToolkit, ToolCommand, parse_probe_duration};

/// Media toolkit backed by the ffmpeg and ffprobe binaries.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
}

impl Ffmpeg {
    /// Use the given binaries without checking that they exist.
    pub fn new(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }

    /// Resolve both binaries on `PATH` (or as explicit paths).
    pub fn locate(ffmpeg: &Path, ffprobe: &Path) -> Result<Self> {
        let ffmpeg = resolve(ffmpeg)?;
        let ffprobe = resolve(ffprobe)?;
        debug!(
            "Using ffmpeg at {}, ffprobe at {}",
            ffmpeg.display(),
            ffprobe.display()
        );
        Ok(Self { ffmpeg, ffprobe })
    }

    fn ffmpeg(&self) -> ToolCommand {
        ToolCommand::new(&self.ffmpeg).args(["-hide_banner", "-nostdin"])
    }

    /// Command used to probe the duration of `source`.
    pub fn probe_command(&self, source: &Path) -> ToolCommand {
        ToolCommand::new(&self.ffprobe)
            .args(["-v", "error", "-print_format", "json", "-show_format"])
            .arg(source)
    }

    /// Command used to run silence detection over `source`.
    pub fn detect_command(&self, source: &Path, settings: &DetectionSettings) -> ToolCommand {
        self.ffmpeg()
            .arg("-vn")
            .input(source)
            .arg("-af")
            .arg(settings.filter())
            .args(["-f", "null", "-"])
    }

    /// Command used to extract `[start, end]` of `source` to `output`.
    pub fn extract_command(
        &self,
        source: &Path,
        start: f64,
        end: f64,
        copy: bool,
        output: &Path,
    ) -> ToolCommand {
        self.ffmpeg()
            .args(["-v", "error", "-y"])
            .input(source)
            .arg("-ss")
            .arg(timestamp(start))
            .arg("-to")
            .arg(timestamp(end))
            .copy_codec(copy)
            .arg(output)
    }

    /// Command used to join the clips listed in `manifest` into `output`.
    pub fn concat_command(&self, manifest: &Path, copy: bool, output: &Path) -> ToolCommand {
        self.ffmpeg()
            .args(["-loglevel", "error", "-y", "-f", "concat", "-safe", "0"])
            .input(manifest)
            .copy_codec(copy)
            .arg(output)
    }
}

impl MediaToolkit for Ffmpeg {
    fn probe_duration(&self, source: &Path) -> Result<f64> {
        let output = self.probe_command(source).output()?;
        if !output.success {
            return Err(Error::ProbeFailed {
                path: source.to_path_buf(),
                message: output.failure_message(),
            });
        }

        parse_probe_duration(&output.stdout).ok_or_else(|| Error::DurationUnavailable {
            path: source.to_path_buf(),
        })
    }

    fn detect_silence(&self, source: &Path, settings: &DetectionSettings) -> Result<String> {
        let output = self.detect_command(source, settings).output()?;
        if !output.success {
            return Err(Error::DetectionFailed {
                path: source.to_path_buf(),
                message: output.failure_message(),
            });
        }

        // silencedetect reports through the log, which ffmpeg writes to stderr.
        Ok(output.stderr)
    }

    fn extract_range(
        &self,
        source: &Path,
        start: f64,
        end: f64,
        copy: bool,
        output_id: &str,
        output: &Path,
    ) -> Result<()> {
        let result = self
            .extract_command(source, start, end, copy, output)
            .output()?;
        if result.success {
            Ok(())
        } else {
            Err(Error::ExtractionFailed {
                output_id: output_id.to_string(),
                start,
                end,
                message: result.failure_message(),
            })
        }
    }

    fn concatenate(&self, manifest: &Path, copy: bool, output: &Path) -> Result<()> {
        let result = self.concat_command(manifest, copy, output).output()?;
        if result.success {
            Ok(())
        } else {
            Err(Error::ConcatFailed {
                path: output.to_path_buf(),
                message: result.failure_message(),
            })
        }
    }
}

fn resolve(tool: &Path) -> Result<PathBuf> {
    which::which(tool).map_err(|_| Error::ToolNotFound {
        tool: tool.display().to_string(),
    })
}

fn timestamp(seconds: f64) -> String {
    format!("{seconds:.prec$}", prec = TIMESTAMP_PRECISION)
}
