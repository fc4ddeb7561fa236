//! External command builder and runner.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::constants::tools::STDERR_TAIL_LINES;
use crate::error::{Error, Result};

/// Builder for an external tool invocation.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    /// Program to run.
    program: PathBuf,
    /// Arguments in order.
    args: Vec<OsString>,
}

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Whether the process exited with status 0.
    pub success: bool,
    /// Exit code, if the process was not killed by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: Vec<u8>,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

impl ToolCommand {
    /// Create a command for `program`.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append arguments only when `condition` holds.
    #[must_use]
    pub fn args_if<I, S>(self, condition: bool, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        if condition { self.args(args) } else { self }
    }

    /// Input file (`-i <path>`).
    #[must_use]
    pub fn input(self, path: impl AsRef<Path>) -> Self {
        self.arg("-i").arg(path.as_ref())
    }

    /// Stream copy instead of re-encoding, when `copy` is set.
    #[must_use]
    pub fn copy_codec(self, copy: bool) -> Self {
        self.args_if(copy, ["-c", "copy"])
    }

    /// Program being run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments, for logging and tests.
    pub fn build_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Run to completion, capturing stdout and stderr.
    pub fn output(&self) -> Result<ToolOutput> {
        debug!(
            "Running: {} {}",
            self.program.display(),
            self.build_args().join(" ")
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::ToolSpawn {
                tool: self.program.display().to_string(),
                source: e,
            })?;

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl ToolOutput {
    /// Short description of a failure for error messages.
    pub fn failure_message(&self) -> String {
        let tail = stderr_tail(&self.stderr, STDERR_TAIL_LINES);
        let status = self
            .code
            .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"));
        if tail.is_empty() {
            status
        } else {
            format!("{status}: {tail}")
        }
    }
}

/// Last `lines` non-empty lines of `stderr`, joined with `"; "`.
pub fn stderr_tail(stderr: &str, lines: usize) -> String {
    let kept: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let skip = kept.len().saturating_sub(lines);
    kept[skip..].join("; ")
}
