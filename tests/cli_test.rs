//! Integration tests for the command-line interface.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_missing_input_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("silentcut");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<INPUT>"));
}

#[test]
fn test_nonexistent_input_is_rejected() {
    let mut cmd = cargo_bin_cmd!("silentcut");
    cmd.arg("/nonexistent/talk.mp4");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_noise_out_of_range_is_rejected() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut cmd = cargo_bin_cmd!("silentcut");
    cmd.arg("-n").arg("5").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("noise must be between"));
}

#[test]
fn test_config_path_prints_toml_file() {
    let mut cmd = cargo_bin_cmd!("silentcut");
    cmd.arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with("config.toml").trim());
}

#[test]
fn test_help_lists_options() {
    let mut cmd = cargo_bin_cmd!("silentcut");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--min-duration"))
        .stdout(predicate::str::contains("--noise"));
}

#[cfg(unix)]
mod fake_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const FFPROBE: &str = r#"#!/bin/sh
echo '{"format":{"duration":"10.000000"}}'
"#;

    /// Detects one silence at 2..3, extracts fine, fails to concatenate.
    const FFMPEG: &str = r#"#!/bin/sh
case "$*" in
  *silencedetect*)
    echo "[silencedetect @ 0x1] silence_start: 2" >&2
    echo "[silencedetect @ 0x1] silence_end: 3 | silence_duration: 1" >&2
    ;;
  *"-f concat"*)
    echo "Conversion failed!" >&2
    exit 1
    ;;
  *)
    for last; do :; done
    printf clip > "$last"
    ;;
esac
"#;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn failing_concat_cmd(dir: &TempDir) -> assert_cmd::Command {
        let ffmpeg = write_script(dir.path(), "ffmpeg", FFMPEG);
        let ffprobe = write_script(dir.path(), "ffprobe", FFPROBE);
        let input = dir.path().join("talk.mp4");
        std::fs::write(&input, b"video").unwrap();

        let mut cmd = cargo_bin_cmd!("silentcut");
        cmd.env("HOME", dir.path())
            .env("XDG_CONFIG_HOME", dir.path().join("config"))
            .arg("--ffmpeg")
            .arg(ffmpeg)
            .arg("--ffprobe")
            .arg(ffprobe)
            .arg("--no-progress")
            .arg(input);
        cmd
    }

    #[test]
    fn test_concat_failure_still_prints_summary() {
        let dir = TempDir::new().unwrap();

        failing_concat_cmd(&dir)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("muted: 1"))
            .stdout(predicate::str::contains("sound: 2"))
            .stdout(predicate::str::contains("failed: 0"))
            .stdout(predicate::str::contains("total sounded duration"))
            .stderr(predicate::str::contains("Conversion failed"));

        assert!(!dir.path().join("talk.p1.mts").exists());
        assert!(!dir.path().join("talk_cut.mp4").exists());
    }

    #[test]
    fn test_concat_failure_still_prints_json_report() {
        let dir = TempDir::new().unwrap();

        failing_concat_cmd(&dir)
            .arg("--json")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains(r#""outcome":"failed""#))
            .stdout(predicate::str::contains(r#""muted_count":1"#));
    }
}
