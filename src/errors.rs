//! Error kinds surfaced by gitp
//!
//! Every fallible operation returns `anyhow::Result`; failures that callers
//! need to tell apart are raised as a [`GitpError`] and recovered with
//! `downcast_ref`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitpError {
    /// Bad or missing command-line arguments
    Usage(String),
    /// The external binary exited with a failure status
    ExternalCommand {
        /// Exit code, `None` when the process was terminated by a signal
        code: Option<i32>,
        /// Combined, trimmed stdout and stderr
        output: String,
    },
    /// Malformed confirmation input or unreadable stdin
    Prompt(String),
}

impl GitpError {
    pub fn usage(message: impl Into<String>) -> Self {
        GitpError::Usage(message.into())
    }

    /// Exit code of a failed external command, if any
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GitpError::ExternalCommand { code, .. } => *code,
            _ => None,
        }
    }

    /// Whether this is an external failure whose code is in `benign`
    pub fn is_benign(&self, benign: &[i32]) -> bool {
        self.exit_code().is_some_and(|code| benign.contains(&code))
    }
}

impl fmt::Display for GitpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitpError::Usage(message) => write!(f, "{}", message),
            GitpError::ExternalCommand { code, output } => {
                let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                if output.is_empty() {
                    write!(f, "[{}]", code)
                } else {
                    write!(f, "[{}] {}", code, output)
                }
            }
            GitpError::Prompt(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for GitpError {}

/// Find the [`GitpError`] carried by an `anyhow::Error`, if any
pub fn kind_of(error: &anyhow::Error) -> Option<&GitpError> {
    error.downcast_ref::<GitpError>()
}

/// Process exit code to use when `error` ends the program
pub fn process_exit_code(error: &anyhow::Error) -> i32 {
    match kind_of(error).and_then(GitpError::exit_code) {
        Some(code @ 1..=255) => code,
        _ => 1,
    }
}
