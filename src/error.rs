//! Error types for silentcut.

/// Result type alias for silentcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for silentcut.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Input video file does not exist.
    #[error("input file does not exist: {path}")]
    InputNotFound {
        /// Path to the missing input.
        path: std::path::PathBuf,
    },

    /// Output path would overwrite the input.
    #[error("output file must differ from input: {path}")]
    OutputIsInput {
        /// The shared path.
        path: std::path::PathBuf,
    },

    /// External tool binary could not be found.
    #[error("'{tool}' not found (install it or set its path in the config file)")]
    ToolNotFound {
        /// Name or path of the tool.
        tool: String,
    },

    /// External tool could not be started.
    #[error("failed to run '{tool}'")]
    ToolSpawn {
        /// Name or path of the tool.
        tool: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Duration probe exited with an error.
    #[error("failed to probe '{path}': {message}")]
    ProbeFailed {
        /// Path to the probed file.
        path: std::path::PathBuf,
        /// Tool error text.
        message: String,
    },

    /// Probe output did not contain a usable duration.
    #[error("could not determine duration of '{path}'")]
    DurationUnavailable {
        /// Path to the probed file.
        path: std::path::PathBuf,
    },

    /// Silence detection pass failed.
    #[error("silence detection failed for '{path}': {message}")]
    DetectionFailed {
        /// Path to the source file.
        path: std::path::PathBuf,
        /// Tool error text.
        message: String,
    },

    /// Extraction of a single clip failed.
    #[error("failed to extract clip {output_id} ({start:.3}s-{end:.3}s): {message}")]
    ExtractionFailed {
        /// Identifier of the segment.
        output_id: String,
        /// Segment start in seconds.
        start: f64,
        /// Segment end in seconds.
        end: f64,
        /// Tool error text.
        message: String,
    },

    /// No clip was extracted successfully, so there is nothing to join.
    #[error("no clips were extracted ({failed} failed), nothing to concatenate")]
    NoClipsExtracted {
        /// Number of failed extractions.
        failed: usize,
    },

    /// Concatenation of the extracted clips failed.
    #[error("failed to concatenate clips into '{path}': {message}")]
    ConcatFailed {
        /// Output file path.
        path: std::path::PathBuf,
        /// Tool error text.
        message: String,
    },

    /// Failed to create the work directory.
    #[error("failed to create work directory '{path}'")]
    WorkDirCreate {
        /// Path to the work directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the concat manifest.
    #[error("failed to write manifest '{path}'")]
    ManifestWrite {
        /// Path to the manifest.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The run failed after cutting started.
    ///
    /// `report` holds the counters gathered up to the failure.
    #[error("{source}")]
    Incomplete {
        /// Counters and totals for the failed run.
        report: Box<crate::pipeline::RunReport>,
        /// The failure that ended the run.
        source: Box<Error>,
    },

    /// Failed to serialize the run report.
    #[error("failed to serialize report")]
    ReportSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
