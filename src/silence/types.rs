//! Interval types shared by the parser and the planner.

use std::fmt;

use serde::Serialize;

/// A detected span of silence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MuteInterval {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Duration in seconds as reported by the detector.
    pub duration: f64,
}

impl MuteInterval {
    /// Create an interval, deriving the duration from its bounds.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            duration: end - start,
        }
    }
}

impl fmt::Display for MuteInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}s - {:.3}s ({:.3}s)",
            self.start, self.end, self.duration
        )
    }
}

/// A span of the source judged non-silent, kept in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundedSegment {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds, after any minimum-duration extension.
    pub end: f64,
    /// Duration in seconds, after any minimum-duration extension.
    pub duration: f64,
    /// Sequential identifier (`"1"`, `"2"`, ...) naming the clip artifact.
    pub output_id: String,
    /// Whether the end was pushed forward to reach the minimum duration.
    pub extended: bool,
}

impl fmt::Display for SoundedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {:.3}s - {:.3}s ({:.3}s){}",
            self.output_id,
            self.start,
            self.end,
            self.duration,
            if self.extended { " [extended]" } else { "" }
        )
    }
}
