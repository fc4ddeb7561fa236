//! Silence-detection log parsing.
//!
//! Parsing is split in two steps: [`parse_line`] tokenizes one log line into
//! a [`SilenceEvent`], and [`pair_events`] pairs starts with ends into
//! [`MuteInterval`]s. Lines without a recognized marker are ignored.

use tracing::debug;

use crate::constants::markers;

use super::MuteInterval;

/// A marker emitted by the silence detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SilenceEvent {
    /// Silence began at the given time in seconds.
    Start(f64),
    /// Silence ended at the given time, with the reported duration if present.
    End {
        /// End time in seconds.
        at: f64,
        /// Duration reported by the detector.
        duration: Option<f64>,
    },
}

/// Result of pairing detector events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SilenceLog {
    /// Closed mute intervals in detection order.
    pub intervals: Vec<MuteInterval>,
    /// A silence start that never received a matching end.
    ///
    /// This happens when the input ends while silent.
    pub unterminated: Option<f64>,
}

impl SilenceLog {
    /// Return the intervals, closing an unterminated silence at `total_duration`.
    ///
    /// The synthesized interval runs from the pending start to the end of the
    /// media so the silent tail is treated as muted. A pending start at or
    /// past the end of the media is dropped.
    pub fn close(self, total_duration: f64) -> Vec<MuteInterval> {
        let mut intervals = self.intervals;
        if let Some(start) = self.unterminated {
            if start < total_duration {
                debug!("Closing trailing silence at {start:.3}s-{total_duration:.3}s");
                intervals.push(MuteInterval::new(start, total_duration));
            } else {
                debug!("Dropping trailing silence start {start:.3}s past end of media");
            }
        }
        intervals
    }
}

/// Parse the full text of a detection pass.
///
/// ffmpeg rewrites its status line with carriage returns, so a marker can
/// follow a `\r` on the same physical line. Each `\r`-separated piece is
/// tokenized on its own.
pub fn parse_silence_log(log: &str) -> SilenceLog {
    let events = log
        .lines()
        .flat_map(|line| line.split('\r'))
        .filter_map(parse_line);
    pair_events(events)
}

/// Tokenize a single log line.
///
/// Recognizes `silence_start: <t>` and
/// `silence_end: <t> | silence_duration: <d>`. Returns `None` for any other
/// line, or when the timestamp does not parse.
pub fn parse_line(line: &str) -> Option<SilenceEvent> {
    if let Some(rest) = after_marker(line, markers::SILENCE_START) {
        return first_number(rest).map(SilenceEvent::Start);
    }

    let rest = after_marker(line, markers::SILENCE_END)?;
    let (end_part, tail) = rest.split_once('|').unwrap_or((rest, ""));
    let at = first_number(end_part)?;
    let duration = after_marker(tail, markers::SILENCE_DURATION).and_then(first_number);

    Some(SilenceEvent::End { at, duration })
}

/// Pair start and end events into mute intervals.
///
/// - A start overwrites any pending, unconsumed start.
/// - An end without a pending start is dropped.
/// - An end that is not after its start is dropped.
pub fn pair_events<I>(events: I) -> SilenceLog
where
    I: IntoIterator<Item = SilenceEvent>,
{
    let mut intervals = Vec::new();
    let mut pending: Option<f64> = None;

    for event in events {
        match event {
            SilenceEvent::Start(at) => {
                if let Some(previous) = pending.replace(at) {
                    debug!("Silence start {previous:.3}s superseded by {at:.3}s");
                }
            }
            SilenceEvent::End { at, duration } => {
                let Some(start) = pending.take() else {
                    debug!("Ignoring silence end {at:.3}s without a start");
                    continue;
                };

                if at <= start {
                    debug!("Ignoring silence end {at:.3}s not after start {start:.3}s");
                    continue;
                }

                intervals.push(MuteInterval {
                    start,
                    end: at,
                    duration: duration.unwrap_or(at - start),
                });
            }
        }
    }

    SilenceLog {
        intervals,
        unterminated: pending,
    }
}

fn after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker).map(|idx| &line[idx + marker.len()..])
}

fn first_number(s: &str) -> Option<f64> {
    s.split_whitespace()
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
