//! Silentcut - remove silent parts from videos.
//!
//! This crate detects silence with ffmpeg, plans the sounded segments that
//! remain, extracts them as clips, and joins the clips into a new file.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod media;
pub mod output;
pub mod pipeline;
pub mod silence;

use clap::Parser;
use cli::{Cli, Command, CutArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use constants::{EXIT_INTERRUPTED, MIN_SILENCE_DURATION};
use media::{DetectionSettings, Ffmpeg};
use pipeline::{Checkpoint, CutJob, CutSettings, NoPause, PromptPause, execute_plan, plan_job};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for silentcut CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.cut.verbose, cli.cut.quiet);

    // Remove partial clips and the manifest on interrupt
    if let Err(e) = ctrlc::set_handler(|| {
        pipeline::cleanup_all_artifacts();
        std::process::exit(EXIT_INTERRUPTED);
    }) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let config = load_default_config()?;

    // clap enforces the input when no subcommand is given
    let Some(input) = cli.input else {
        return Err(Error::ConfigValidation {
            message: "no input file given".to_string(),
        });
    };

    cut_file(&input, &cli.cut, &config)
}

/// Cut one input file with the given options.
fn cut_file(input: &Path, args: &CutArgs, config: &Config) -> Result<()> {
    let job = build_job(input, args, config)?;

    let ffmpeg = args.ffmpeg.as_deref().unwrap_or(&config.tools.ffmpeg);
    let ffprobe = args.ffprobe.as_deref().unwrap_or(&config.tools.ffprobe);
    let toolkit = Ffmpeg::locate(ffmpeg, ffprobe)?;

    info!("Processing {}", job.source.display());
    let plan = plan_job(&toolkit, &job)?;

    if !args.json && !args.quiet {
        print!(
            "{}",
            output::render_plan(&plan.intervals, &plan.segments, |id| job.clip_name(id))
        );
    }

    let mut checkpoint: Box<dyn Checkpoint> = if args.pause {
        Box::new(PromptPause::stdio())
    } else {
        Box::new(NoPause)
    };

    match execute_plan(&toolkit, &job, &plan, checkpoint.as_mut()) {
        Ok(report) => print_report(&report, args),
        Err(Error::Incomplete { report, source }) => {
            print_report(&report, args)?;
            Err(*source)
        }
        Err(e) => Err(e),
    }
}

/// Print the run summary, or the JSON report with `--json`.
fn print_report(report: &pipeline::RunReport, args: &CutArgs) -> Result<()> {
    if args.json {
        println!("{}", output::emit_json_report(report)?);
    } else if !args.quiet {
        print!("{}", output::render_summary(report));
    }
    Ok(())
}

/// Resolve a [`CutJob`] from CLI options and configuration.
///
/// Command-line values take precedence over the config file, which takes
/// precedence over built-in defaults.
pub fn build_job(input: &Path, args: &CutArgs, config: &Config) -> Result<CutJob> {
    let defaults = &config.defaults;

    let mut silence_duration = args.duration.unwrap_or(defaults.silence_duration);
    if silence_duration < MIN_SILENCE_DURATION {
        warn!(
            "Silence duration {silence_duration}s is below the minimum, using {MIN_SILENCE_DURATION}s"
        );
        silence_duration = MIN_SILENCE_DURATION;
    }

    let noise_db = args.noise.unwrap_or(defaults.noise_db);
    config::validate_noise(noise_db)?;

    let min_duration = args.min_duration.unwrap_or(defaults.min_duration);
    config::validate_min_duration(min_duration)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input, &config.output.suffix));
    if same_file(input, &output) {
        return Err(Error::OutputIsInput { path: output });
    }

    let work_dir = args
        .work_dir
        .clone()
        .or_else(|| config.output.work_dir.clone())
        .unwrap_or_else(|| parent_dir(&output));

    Ok(CutJob {
        source: input.to_path_buf(),
        output,
        work_dir,
        clip_extension: config.output.clip_extension.clone(),
        settings: CutSettings {
            detection: DetectionSettings {
                noise_db,
                silence_duration,
            },
            min_duration,
            copy: args.copy || defaults.copy,
        },
        keep_temp: args.keep_temp,
        dry_run: args.dry_run,
        show_progress: !args.quiet && !args.no_progress,
    })
}

/// Default output path: `<stem><suffix>.<ext>` beside the input.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".to_string(), |s| s.to_string_lossy().into_owned());
    let name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(name)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Absolute form of `path`, resolving the parent when the file is missing.
fn resolve_path(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Some(resolved);
    }
    let name = path.file_name()?;
    parent_dir(path)
        .canonicalize()
        .ok()
        .map(|parent| parent.join(name))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (resolve_path(a), resolve_path(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Logs go to stderr so stdout stays clean for the plan and JSON report
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
