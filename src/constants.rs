//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "silentcut";

/// Default noise threshold in dB below which audio counts as silence.
pub const DEFAULT_NOISE_DB: f64 = -30.0;

/// Default minimum silence duration in seconds.
pub const DEFAULT_SILENCE_DURATION: f64 = 1.0;

/// Default minimum duration of a sounded segment in seconds.
///
/// Shorter segments are extended forward to this length. Zero disables
/// the extension.
pub const DEFAULT_MIN_DURATION: f64 = 1.0;

/// Smallest silence duration passed to the detector.
///
/// Requested values below this are raised to it.
pub const MIN_SILENCE_DURATION: f64 = 1.0;

/// Noise threshold bounds in dB.
pub mod noise {
    /// Lowest accepted noise threshold.
    pub const MIN: f64 = -120.0;
    /// Highest accepted noise threshold.
    pub const MAX: f64 = 0.0;
}

/// Suffix appended to the input file stem for the default output name.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_cut";

/// Container extension used for intermediate clips.
///
/// MPEG-TS joins cleanly with the concat demuxer, including with `-c copy`.
pub const DEFAULT_CLIP_EXTENSION: &str = "mts";

/// Marker between the input stem and the segment id in clip names (`talk.p1.mts`).
pub const CLIP_PREFIX: &str = "p";

/// Suffix of the concat manifest written next to the clips.
pub const MANIFEST_SUFFIX: &str = ".silentcut.txt";

/// Decimal places used when passing timestamps to external tools.
pub const TIMESTAMP_PRECISION: usize = 6;

/// External tool names.
pub mod tools {
    /// Default ffmpeg binary.
    pub const FFMPEG: &str = "ffmpeg";
    /// Default ffprobe binary.
    pub const FFPROBE: &str = "ffprobe";
    /// Number of trailing stderr lines kept in error messages.
    pub const STDERR_TAIL_LINES: usize = 8;
}

/// Markers emitted by the ffmpeg `silencedetect` filter.
pub mod markers {
    /// Start-of-silence marker.
    pub const SILENCE_START: &str = "silence_start:";
    /// End-of-silence marker.
    pub const SILENCE_END: &str = "silence_end:";
    /// Duration marker following the end marker.
    pub const SILENCE_DURATION: &str = "silence_duration:";
}

/// Exit code used when the run is interrupted with Ctrl+C.
pub const EXIT_INTERRUPTED: i32 = 130; // 128 + SIGINT(2)
