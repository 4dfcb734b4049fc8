//! Invocation and result values exchanged with the git runner

use crate::errors::GitpError;
use std::fmt;

/// One call of the external binary: a command token plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    command: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new<C, I, S>(command: C, args: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an invocation from a token list, `None` when the list is empty
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let (command, args) = tokens.split_first()?;
        Some(Self::new(
            command.as_ref(),
            args.iter().map(|arg| arg.as_ref().to_string()),
        ))
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Command followed by its arguments, as passed to the process
    pub fn to_argv(&self) -> Vec<String> {
        std::iter::once(self.command.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Outcome of an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Combined stdout and stderr, trimmed
    pub stdout: String,
    /// Whether the process exited with a failure status
    pub failed: bool,
    /// Exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,
}

impl InvocationResult {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            failed: false,
            exit_code: Some(0),
        }
    }

    pub fn failure(code: i32, output: impl Into<String>) -> Self {
        Self {
            stdout: output.into(),
            failed: true,
            exit_code: Some(code),
        }
    }

    /// Output on success, an [`GitpError::ExternalCommand`] otherwise
    pub fn into_result(self) -> Result<String, GitpError> {
        if self.failed {
            Err(GitpError::ExternalCommand {
                code: self.exit_code,
                output: self.stdout,
            })
        } else {
            Ok(self.stdout)
        }
    }
}
