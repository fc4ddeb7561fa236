//! Progress bar utilities for clip extraction.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for extracting clips.
///
/// Returns a hidden bar when disabled so callers can report unconditionally.
pub fn create_clip_progress(total_clips: usize, enabled: bool) -> ProgressBar {
    if !enabled || total_clips == 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total_clips as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} clips ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_progress_is_hidden() {
        assert!(create_clip_progress(10, false).is_hidden());
        assert!(create_clip_progress(0, true).is_hidden());
    }

    #[test]
    fn test_progress_length() {
        let pb = create_clip_progress(3, true);
        assert_eq!(pb.length(), Some(3));
        pb.inc(1);
        assert_eq!(pb.position(), 1);
        finish_progress(&pb, "done");
        assert!(pb.is_finished());
    }
}
