//! Silence segmentation.
//!
//! Turns the raw log of a silence-detection pass into mute intervals, and
//! mute intervals into the sounded segments that are kept in the output.

mod parser;
mod planner;
mod types;

pub use parser::{SilenceEvent, SilenceLog, pair_events, parse_line, parse_silence_log};
pub use planner::plan_segments;
pub use types::{MuteInterval, SoundedSegment};
