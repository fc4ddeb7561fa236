//! Sounded segment planning.

use super::{MuteInterval, SoundedSegment};

/// Plan the sounded segments that remain once mute intervals are removed.
///
/// Candidates are the complement of `intervals` within `[0, total_duration]`:
/// the span before the first silence, the gaps between consecutive
/// silences, and the span after the last one. Zero-width candidates are
/// dropped. A candidate shorter than `min_duration` has its end pushed
/// forward until it reaches `min_duration`; its start never moves, so an
/// extended segment may overlap the following silence or run past the end
/// of the media.
///
/// Identifiers are assigned sequentially from `1` in emission order.
///
/// Returns an empty plan when `intervals` is empty: with no detected silence
/// there is nothing to cut.
pub fn plan_segments(
    intervals: &[MuteInterval],
    total_duration: f64,
    min_duration: f64,
) -> Vec<SoundedSegment> {
    let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
        return Vec::new();
    };

    let candidates = std::iter::once((0.0, first.start))
        .chain(intervals.windows(2).map(|w| (w[0].end, w[1].start)))
        .chain(std::iter::once((last.end, total_duration)));

    let mut segments = Vec::new();
    for (start, end) in candidates {
        if end <= start {
            continue;
        }

        let duration = end - start;
        let (end, duration, extended) = if duration < min_duration {
            (start + min_duration, min_duration, true)
        } else {
            (end, duration, false)
        };

        segments.push(SoundedSegment {
            start,
            end,
            duration,
            output_id: (segments.len() + 1).to_string(),
            extended,
        });
    }

    segments
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mute(start: f64, end: f64) -> MuteInterval {
        MuteInterval::new(start, end)
    }

    #[test]
    fn test_no_intervals_yields_nothing() {
        assert!(plan_segments(&[], 10.0, 0.0).is_empty());
    }

    #[test]
    fn test_silence_covering_everything_yields_nothing() {
        assert!(plan_segments(&[mute(0.0, 10.0)], 10.0, 0.0).is_empty());
    }

    #[test]
    fn test_silence_at_start_drops_leading_candidate() {
        let segments = plan_segments(&[mute(0.0, 2.0)], 10.0, 0.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, 2.0);
        assert_eq!(segments[0].end, 10.0);
        assert_eq!(segments[0].output_id, "1");
    }

    #[test]
    fn test_abutting_silences_drop_zero_width_gap() {
        let segments = plan_segments(&[mute(1.0, 2.0), mute(2.0, 3.0)], 5.0, 0.0);
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].start, segments[0].end), (0.0, 1.0));
        assert_eq!((segments[1].start, segments[1].end), (3.0, 5.0));
        assert_eq!(segments[1].output_id, "2");
    }

    #[test]
    fn test_short_segment_is_extended_forward() {
        let segments = plan_segments(&[mute(0.5, 3.0)], 10.0, 1.0);
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].end, 1.0);
        assert_eq!(segments[0].duration, 1.0);
        assert!(segments[0].extended);
        assert!(!segments[1].extended);
    }

    #[test]
    fn test_extension_may_run_past_end_of_media() {
        let segments = plan_segments(&[mute(1.0, 9.5)], 10.0, 2.0);
        let last = segments.last().unwrap();
        assert_eq!(last.start, 9.5);
        assert_eq!(last.end, 11.5);
    }
}
