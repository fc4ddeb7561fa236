//! Cutting pipeline: plan, extract, join, clean up.

mod artifacts;
mod checkpoint;
mod coordinator;
mod manifest;
mod report;

pub use artifacts::{
    ArtifactSet, cleanup_all_artifacts, register_artifact, registered_artifacts,
    unregister_artifact,
};
pub use checkpoint::{Checkpoint, NoPause, PromptPause};
pub use coordinator::{CutJob, CutSettings, Plan, execute_plan, plan_job, run_job};
pub use manifest::{manifest_line, render_manifest, write_manifest};
pub use report::{Outcome, RunReport};
