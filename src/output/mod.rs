//! Console output: progress bars, plan tables, and the run summary.

pub mod progress;
mod summary;

pub use summary::{emit_json_report, format_hms, render_plan, render_summary};
