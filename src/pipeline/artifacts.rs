//! Temporary artifact tracking.
//!
//! Every clip and manifest a run writes is tracked by an [`ArtifactSet`] and
//! mirrored in a global registry, so the Ctrl+C handler can remove them when
//! the run is interrupted.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};

use tracing::{debug, warn};

/// Global registry of live temporary paths for cleanup on signal.
static ACTIVE_ARTIFACTS: LazyLock<Mutex<Vec<PathBuf>>> = LazyLock::new(|| Mutex::new(Vec::new()));

/// Register a temporary path for cleanup on signal.
pub fn register_artifact(path: &Path) {
    if let Ok(mut artifacts) = ACTIVE_ARTIFACTS.lock() {
        artifacts.push(path.to_path_buf());
    }
}

/// Unregister a temporary path after normal cleanup.
pub fn unregister_artifact(path: &Path) {
    if let Ok(mut artifacts) = ACTIVE_ARTIFACTS.lock() {
        artifacts.retain(|p| p != path);
    }
}

/// Snapshot of the currently registered paths.
pub fn registered_artifacts() -> Vec<PathBuf> {
    ACTIVE_ARTIFACTS
        .lock()
        .map(|artifacts| artifacts.clone())
        .unwrap_or_default()
}

/// Remove all registered paths. Called on signal.
pub fn cleanup_all_artifacts() {
    if let Ok(mut artifacts) = ACTIVE_ARTIFACTS.lock() {
        for path in artifacts.drain(..) {
            let _ = fs::remove_file(path);
        }
    }
}

/// RAII owner of the temporary files written by one run.
///
/// Files are removed by [`ArtifactSet::cleanup`] or on drop. With `keep`
/// set, paths are still tracked but never removed or registered.
#[derive(Debug)]
pub struct ArtifactSet {
    paths: Vec<PathBuf>,
    keep: bool,
}

impl ArtifactSet {
    /// Create an empty set.
    pub fn new(keep: bool) -> Self {
        Self {
            paths: Vec::new(),
            keep,
        }
    }

    /// Track a path that is about to be written.
    pub fn track(&mut self, path: &Path) {
        if !self.keep {
            register_artifact(path);
        }
        self.paths.push(path.to_path_buf());
    }

    /// Paths tracked so far, in the order they were added.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Remove every tracked path that exists. Returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        if self.keep {
            if !self.paths.is_empty() {
                debug!("Keeping {} temporary file(s)", self.paths.len());
            }
            self.paths.clear();
            return 0;
        }

        let mut removed = 0;
        for path in self.paths.drain(..) {
            if path.exists() {
                match fs::remove_file(&path) {
                    Ok(()) => removed += 1,
                    Err(e) => warn!("Failed to remove {}: {e}", path.display()),
                }
            }
            unregister_artifact(&path);
        }
        removed
    }
}

impl Drop for ArtifactSet {
    fn drop(&mut self) {
        self.cleanup();
    }
}
