//! Plan tables and run summary rendering.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::pipeline::{Outcome, RunReport};
use crate::silence::{MuteInterval, SoundedSegment};

/// Format seconds as `HH:MM:SS`, truncating fractions.
///
/// Hours are not wrapped at 24.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Render the muted and sounded tables for a plan.
///
/// `clip_name` maps a segment's identifier to the clip file it will be
/// written to.
pub fn render_plan(
    intervals: &[MuteInterval],
    segments: &[SoundedSegment],
    clip_name: impl Fn(&str) -> String,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "===[ MUTED (START, END, DURATION) ]===");
    for (i, interval) in intervals.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4} {:>12.3} {:>12.3} {:>10.3}",
            i + 1,
            interval.start,
            interval.end,
            interval.duration
        );
    }

    let _ = writeln!(out, "===[ SOUNDED (CLIP, START, END, DURATION) ]===");
    for segment in segments {
        let _ = writeln!(
            out,
            "{:>4} {:<16} {:>12.3} {:>12.3} {:>10.3}{}",
            segment.output_id,
            clip_name(&segment.output_id),
            segment.start,
            segment.end,
            segment.duration,
            if segment.extended { " *" } else { "" }
        );
    }

    out
}

/// Render the human-readable run summary.
pub fn render_summary(report: &RunReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "muted: {}", report.muted_count);
    let _ = writeln!(out, "sound: {}", report.sounded_count);
    let _ = writeln!(out, "altered: {}", report.altered_count);
    let _ = writeln!(out, "failed: {}", report.failed_count);
    let _ = writeln!(
        out,
        "total silence duration: {} ({:.2}s)",
        format_hms(report.total_muted),
        report.total_muted
    );
    let _ = writeln!(
        out,
        "total sounded duration: {} ({:.2}s)",
        format_hms(report.total_sounded),
        report.total_sounded
    );

    let status = match report.outcome {
        Outcome::Completed => report.output.as_ref().map_or_else(
            || "output written".to_string(),
            |p| format!("output written to {}", p.display()),
        ),
        Outcome::NoSilence => "no silence detected, nothing to cut".to_string(),
        Outcome::AllSilent => "file is entirely silent, nothing to keep".to_string(),
        Outcome::DryRun => "dry run, no files written".to_string(),
        Outcome::Declined => "stopped at prompt, no output written".to_string(),
        Outcome::Failed => format!(
            "failed, no output written: {}",
            report.error.as_deref().unwrap_or("unknown error")
        ),
    };
    let _ = writeln!(out, "{status}");

    out
}

/// Serialize the report as a single JSON line.
pub fn emit_json_report(report: &RunReport) -> Result<String> {
    serde_json::to_string(report).map_err(|e| Error::ReportSerialize { source: e })
}
