//! Runner trait and the system git implementation

use super::invocation::{Invocation, InvocationResult};
use crate::constants;
use anyhow::{Context, Result};
use std::process::Command;

/// Runs invocations of the external version-control binary
///
/// `Err` is reserved for failures to start the process at all; a process
/// that runs and exits non-zero is reported through
/// [`InvocationResult::failed`].
pub trait GitRunner {
    fn run(&self, invocation: &Invocation) -> Result<InvocationResult>;
}

/// Runs the real binary as a blocking subprocess in the current directory
#[derive(Debug, Clone)]
pub struct SystemGit {
    binary: String,
}

impl SystemGit {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new(constants::git::DEFAULT_BINARY)
    }
}

impl GitRunner for SystemGit {
    fn run(&self, invocation: &Invocation) -> Result<InvocationResult> {
        let output = Command::new(&self.binary)
            .args(invocation.to_argv())
            .output()
            .with_context(|| {
                format!("Failed to execute {} {}", self.binary, invocation.command())
            })?;

        let stdout = combine_output(&output.stdout, &output.stderr);

        Ok(InvocationResult {
            stdout,
            failed: !output.status.success(),
            exit_code: output.status.code(),
        })
    }
}

/// Join both streams into one trimmed text blob, stdout first
fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);

    match (stdout.trim(), stderr.trim()) {
        ("", err) => err.to_string(),
        (out, "") => out.to_string(),
        (out, err) => format!("{}\n{}", out, err),
    }
}
