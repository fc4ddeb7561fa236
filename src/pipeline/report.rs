//! Run summary.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Error;
use crate::silence::{MuteInterval, SoundedSegment};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Clips were extracted and joined into the output file.
    Completed,
    /// No silence was detected; nothing to cut.
    NoSilence,
    /// The whole file is silent; nothing to keep.
    AllSilent,
    /// Planning only, nothing was written.
    DryRun,
    /// The user declined to continue at a pause prompt.
    Declined,
    /// Cutting started but no output was written.
    Failed,
}

/// Counters and totals for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Source file.
    pub source: PathBuf,
    /// Output file, set once it has been written.
    pub output: Option<PathBuf>,
    /// Probed duration of the source in seconds.
    pub source_duration: f64,
    /// Number of mute intervals.
    pub muted_count: usize,
    /// Number of planned sounded segments.
    pub sounded_count: usize,
    /// Number of segments lengthened to the minimum duration.
    pub altered_count: usize,
    /// Number of segments whose extraction failed.
    pub failed_count: usize,
    /// Sum of mute interval durations in seconds.
    pub total_muted: f64,
    /// Sum of sounded segment durations in seconds, after extension.
    pub total_sounded: f64,
    /// How the run ended.
    pub outcome: Outcome,
    /// Error message when the run failed.
    pub error: Option<String>,
}

impl RunReport {
    /// Build a report from a finished plan, before anything is extracted.
    pub fn from_plan(
        source: PathBuf,
        source_duration: f64,
        intervals: &[MuteInterval],
        segments: &[SoundedSegment],
        outcome: Outcome,
    ) -> Self {
        Self {
            source,
            output: None,
            source_duration,
            muted_count: intervals.len(),
            sounded_count: segments.len(),
            altered_count: segments.iter().filter(|s| s.extended).count(),
            failed_count: 0,
            total_muted: intervals.iter().map(|i| i.duration).sum(),
            total_sounded: segments.iter().map(|s| s.duration).sum(),
            outcome,
            error: None,
        }
    }

    /// Mark the run as failed with `error` and wrap both for the caller.
    pub fn fail(mut self, error: Error) -> Error {
        self.outcome = Outcome::Failed;
        self.error = Some(error.to_string());
        Error::Incomplete {
            report: Box::new(self),
            source: Box::new(error),
        }
    }

    /// Number of clips that made it into the output.
    pub fn joined_count(&self) -> usize {
        self.sounded_count.saturating_sub(self.failed_count)
    }
}
