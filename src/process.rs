#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Blocking child-process execution.
//!
//! Every backend invocation goes through [`run_collect`]: spawn one child,
//! block until it exits, hand back its exit status and captured output. This
//! is the core's sole suspension point; callers that need to bound execution
//! time wrap the call externally and treat expiry as an interrupted test run.

use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result};

/// Captured result of a finished subprocess.
#[derive(Debug)]
pub struct Collected {
    /// Exit status returned by the process.
    pub status: std::process::ExitStatus,
    /// Contents written to stdout.
    pub stdout: Vec<u8>,
    /// Contents written to stderr.
    pub stderr: Vec<u8>,
}

impl Collected {
    /// True when the process exited with a zero status.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Stdout followed by stderr as one payload, for build logs.
    pub fn combined_output(&self) -> Vec<u8> {
        let mut combined = self.stdout.clone();
        combined.extend_from_slice(&self.stderr);
        combined
    }
}

/// Spawns a command, waits for it to finish, and collects stdout/stderr.
///
/// Stdin is closed; both output streams are piped and read to the end. The
/// wait is a blocking one. A non-zero exit status is not an error here --
/// callers inspect [`Collected::status`] and decide what it means.
pub fn run_collect(
    program: impl AsRef<OsStr>,
    args: &[OsString],
    cwd: Option<&Path>,
) -> Result<Collected> {
    let mut cmd = Command::new(&program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {}", program.as_ref().to_string_lossy()))?;

    Ok(Collected {
        status: output.status,
        stdout: output.stdout,
        stderr: output.stderr,
    })
}
