//! Concat manifest writing.
//!
//! The manifest is read by ffmpeg's concat demuxer: one `file '<name>'`
//! line per clip, in playback order. Relative names resolve against the
//! manifest's own directory.

use std::path::Path;

use crate::error::{Error, Result};

/// Render one manifest line, quoting `name` for the concat demuxer.
///
/// A single quote cannot appear inside a quoted string, so it is closed,
/// escaped, and reopened: `it's` becomes `'it'\''s'`.
pub fn manifest_line(name: &str) -> String {
    format!("file '{}'", name.replace('\'', r"'\''"))
}

/// Render the manifest for `entries`, in order.
pub fn render_manifest<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(|e| manifest_line(e.as_ref()) + "\n")
        .collect()
}

/// Write a manifest listing `clips` to `path`.
///
/// Clips in the manifest's directory are listed by file name; others by
/// their full path.
pub fn write_manifest(path: &Path, clips: &[&Path]) -> Result<()> {
    let dir = path.parent();
    let entries: Vec<String> = clips
        .iter()
        .map(|clip| {
            let relative = match (clip.parent(), clip.file_name()) {
                (Some(parent), Some(name)) if Some(parent) == dir => Path::new(name),
                _ => *clip,
            };
            relative.to_string_lossy().into_owned()
        })
        .collect();

    std::fs::write(path, render_manifest(&entries)).map_err(|e| Error::ManifestWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_line() {
        assert_eq!(manifest_line("p1.mts"), "file 'p1.mts'");
    }

    #[test]
    fn test_manifest_line_escapes_quotes() {
        assert_eq!(manifest_line("it's.mts"), r"file 'it'\''s.mts'");
    }

    #[test]
    fn test_render_manifest_keeps_order() {
        let rendered = render_manifest(&["p1.mts", "p3.mts"]);
        assert_eq!(rendered, "file 'p1.mts'\nfile 'p3.mts'\n");
    }

    #[test]
    fn test_write_manifest_uses_names_in_same_dir() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("list.txt");
        let local = dir.path().join("p1.mts");
        let elsewhere = Path::new("/elsewhere/p2.mts");

        write_manifest(&manifest, &[local.as_path(), elsewhere]).unwrap();

        let contents = std::fs::read_to_string(&manifest).unwrap();
        assert_eq!(contents, "file 'p1.mts'\nfile '/elsewhere/p2.mts'\n");
    }
}
