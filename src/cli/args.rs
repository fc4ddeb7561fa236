//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::validators::{parse_input_file, parse_min_duration, parse_noise, parse_positive_float};

/// Remove silent parts from a video using ffmpeg.
#[derive(Debug, Parser)]
#[command(name = "silentcut")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Video file to cut.
    #[arg(required = true, value_parser = parse_input_file)]
    pub input: Option<PathBuf>,

    /// Options for cutting.
    #[command(flatten)]
    pub cut: CutArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for cutting a file.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct CutArgs {
    /// Minimum silence duration in seconds (default: 1, min: 1).
    #[arg(short, long, value_name = "SEC", value_parser = parse_positive_float, env = "SILENTCUT_DURATION")]
    pub duration: Option<f64>,

    /// Minimum duration of each kept clip in seconds (default: 1, 0 disables).
    #[arg(short, long, value_name = "SEC", value_parser = parse_min_duration, env = "SILENTCUT_MIN_DURATION")]
    pub min_duration: Option<f64>,

    /// Noise threshold in dB (default: -30).
    #[arg(short, long, value_name = "DB", value_parser = parse_noise, allow_negative_numbers = true, env = "SILENTCUT_NOISE")]
    pub noise: Option<f64>,

    /// Stream-copy instead of re-encoding (fast, but cuts may glitch).
    #[arg(short, long)]
    pub copy: bool,

    /// Prompt before cutting and before cleanup.
    #[arg(short, long)]
    pub pause: bool,

    /// Output file (default: <input stem>_cut.<ext> next to the input).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for intermediate clips (default: the output directory).
    #[arg(long, env = "SILENTCUT_WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    /// Keep intermediate clips and the concat manifest.
    #[arg(long)]
    pub keep_temp: bool,

    /// Print the cut plan without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to the ffmpeg binary.
    #[arg(long, env = "SILENTCUT_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Path to the ffprobe binary.
    #[arg(long, env = "SILENTCUT_FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Suppress informational output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}
