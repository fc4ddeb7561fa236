//! Pipeline coordination for cutting one file.
//!
//! A run is split in two halves: [`plan_job`] probes, detects, parses, and
//! plans without writing anything; [`execute_plan`] extracts, joins, and
//! cleans up. [`run_job`] chains both.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::constants::{CLIP_PREFIX, MANIFEST_SUFFIX};
use crate::error::{Error, Result};
use crate::media::{DetectionSettings, MediaToolkit};
use crate::output::progress;
use crate::silence::{MuteInterval, SoundedSegment, parse_silence_log, plan_segments};

use super::{ArtifactSet, Checkpoint, Outcome, RunReport, write_manifest};

/// Settings that shape detection and cutting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutSettings {
    /// Detector thresholds.
    pub detection: DetectionSettings,
    /// Minimum sounded-segment duration in seconds.
    pub min_duration: f64,
    /// Stream-copy instead of re-encoding.
    pub copy: bool,
}

/// Everything needed to cut one file.
#[derive(Debug, Clone)]
pub struct CutJob {
    /// Source video.
    pub source: PathBuf,
    /// Final output file.
    pub output: PathBuf,
    /// Directory for clips and the manifest.
    pub work_dir: PathBuf,
    /// Container extension for clips.
    pub clip_extension: String,
    /// Detection and cutting settings.
    pub settings: CutSettings,
    /// Leave clips and manifest in place after the run.
    pub keep_temp: bool,
    /// Stop after planning.
    pub dry_run: bool,
    /// Show a progress bar during extraction.
    pub show_progress: bool,
}

impl CutJob {
    fn stem(&self) -> String {
        self.source.file_stem().map_or_else(
            || "output".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// File name of the clip for a segment identifier.
    pub fn clip_name(&self, output_id: &str) -> String {
        format!(
            "{}.{CLIP_PREFIX}{output_id}.{}",
            self.stem(),
            self.clip_extension
        )
    }

    /// Full path of the clip for a segment identifier.
    pub fn clip_path(&self, output_id: &str) -> PathBuf {
        self.work_dir.join(self.clip_name(output_id))
    }

    /// Full path of the concat manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.work_dir
            .join(format!("{}{MANIFEST_SUFFIX}", self.stem()))
    }
}

/// Result of the planning half of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Probed duration of the source in seconds.
    pub duration: f64,
    /// Mute intervals, including a synthesized trailing one.
    pub intervals: Vec<MuteInterval>,
    /// Planned sounded segments.
    pub segments: Vec<SoundedSegment>,
}

/// Probe, detect, and plan without writing anything.
pub fn plan_job<T>(toolkit: &T, job: &CutJob) -> Result<Plan>
where
    T: MediaToolkit + ?Sized,
{
    if !job.source.is_file() {
        return Err(Error::InputNotFound {
            path: job.source.clone(),
        });
    }

    let duration = toolkit.probe_duration(&job.source)?;
    info!("Duration: {duration:.3}s");

    let detection = &job.settings.detection;
    info!(
        "Detecting silence (noise {} dB, duration {}s)",
        detection.noise_db, detection.silence_duration
    );
    let log = toolkit.detect_silence(&job.source, detection)?;

    let intervals = parse_silence_log(&log).close(duration);
    let segments = plan_segments(&intervals, duration, job.settings.min_duration);
    info!(
        "Planned {} sounded segment(s) around {} silence(s)",
        segments.len(),
        intervals.len()
    );

    Ok(Plan {
        duration,
        intervals,
        segments,
    })
}

/// Extract and join the planned segments, then clean up.
///
/// Extraction failures are counted and skipped. When nothing could be joined,
/// the error is returned after cleanup as [`Error::Incomplete`], carrying the
/// report so the caller can still print it.
pub fn execute_plan<T, C>(
    toolkit: &T,
    job: &CutJob,
    plan: &Plan,
    checkpoint: &mut C,
) -> Result<RunReport>
where
    T: MediaToolkit + ?Sized,
    C: Checkpoint + ?Sized,
{
    let mut report = RunReport::from_plan(
        job.source.clone(),
        plan.duration,
        &plan.intervals,
        &plan.segments,
        Outcome::Completed,
    );

    if plan.intervals.is_empty() {
        info!("No silence detected in {}", job.source.display());
        report.outcome = Outcome::NoSilence;
        return Ok(report);
    }
    if plan.segments.is_empty() {
        warn!("{} is entirely silent", job.source.display());
        report.outcome = Outcome::AllSilent;
        return Ok(report);
    }
    if job.dry_run {
        report.outcome = Outcome::DryRun;
        return Ok(report);
    }
    if !checkpoint.confirm("start making cuts")? {
        report.outcome = Outcome::Declined;
        return Ok(report);
    }

    std::fs::create_dir_all(&job.work_dir).map_err(|e| Error::WorkDirCreate {
        path: job.work_dir.clone(),
        source: e,
    })?;

    let mut artifacts = ArtifactSet::new(job.keep_temp);
    let clips = extract_all(toolkit, job, &plan.segments, &mut artifacts, &mut report);
    let joined = join_clips(toolkit, job, &clips, &mut artifacts, report.failed_count);

    // Cleanup runs regardless of the answer
    if let Err(e) = checkpoint.confirm("clean up temporary files") {
        warn!("Cleanup prompt failed: {e}");
    }
    let removed = artifacts.cleanup();
    debug!("Removed {removed} temporary file(s)");

    if let Err(e) = joined {
        return Err(report.fail(e));
    }
    info!("Wrote {}", job.output.display());
    report.output = Some(job.output.clone());
    Ok(report)
}

/// Plan and execute in one go.
pub fn run_job<T, C>(toolkit: &T, job: &CutJob, checkpoint: &mut C) -> Result<RunReport>
where
    T: MediaToolkit + ?Sized,
    C: Checkpoint + ?Sized,
{
    let plan = plan_job(toolkit, job)?;
    execute_plan(toolkit, job, &plan, checkpoint)
}

/// Extract every segment in order. Returns the clips that were written.
fn extract_all<T>(
    toolkit: &T,
    job: &CutJob,
    segments: &[SoundedSegment],
    artifacts: &mut ArtifactSet,
    report: &mut RunReport,
) -> Vec<PathBuf>
where
    T: MediaToolkit + ?Sized,
{
    let pb = progress::create_clip_progress(segments.len(), job.show_progress);
    let mut clips = Vec::with_capacity(segments.len());

    for segment in segments {
        let path = job.clip_path(&segment.output_id);
        artifacts.track(&path);
        pb.set_message(format!("{:.1}s-{:.1}s", segment.start, segment.end));

        match toolkit.extract_range(
            &job.source,
            segment.start,
            segment.end,
            job.settings.copy,
            &segment.output_id,
            &path,
        ) {
            Ok(()) => {
                debug!("Extracted {segment} -> {}", path.display());
                clips.push(path);
            }
            Err(e) => {
                pb.suspend(|| warn!("{e}"));
                report.failed_count += 1;
            }
        }

        pb.inc(1);
    }

    progress::finish_progress(&pb, "done");
    if report.failed_count > 0 {
        warn!("{} clip(s) failed to extract", report.failed_count);
    }
    clips
}

/// Write the manifest for `clips` and join them into the output.
fn join_clips<T>(
    toolkit: &T,
    job: &CutJob,
    clips: &[PathBuf],
    artifacts: &mut ArtifactSet,
    failed: usize,
) -> Result<()>
where
    T: MediaToolkit + ?Sized,
{
    if clips.is_empty() {
        return Err(Error::NoClipsExtracted { failed });
    }

    let manifest = job.manifest_path();
    artifacts.track(&manifest);
    let entries: Vec<&Path> = clips.iter().map(PathBuf::as_path).collect();
    write_manifest(&manifest, &entries)?;

    info!("Joining {} clip(s)", clips.len());
    toolkit.concatenate(&manifest, job.settings.copy, &job.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> CutJob {
        CutJob {
            source: PathBuf::from("/videos/talk.mp4"),
            output: PathBuf::from("/videos/talk_cut.mp4"),
            work_dir: PathBuf::from("/tmp/work"),
            clip_extension: "mts".to_string(),
            settings: CutSettings {
                detection: DetectionSettings {
                    noise_db: -30.0,
                    silence_duration: 1.0,
                },
                min_duration: 1.0,
                copy: false,
            },
            keep_temp: false,
            dry_run: false,
            show_progress: false,
        }
    }

    #[test]
    fn test_clip_path() {
        assert_eq!(job().clip_name("3"), "talk.p3.mts");
        assert_eq!(job().clip_path("3"), PathBuf::from("/tmp/work/talk.p3.mts"));
    }

    #[test]
    fn test_manifest_path() {
        assert_eq!(
            job().manifest_path(),
            PathBuf::from("/tmp/work/talk.silentcut.txt")
        );
    }
}
