//! Command argument validation utilities
//!
//! Each validator checks the raw argument list of one keyword and reports
//! problems as a [`GitpError::Usage`] carrying the usage hint.

use crate::errors::GitpError;
use crate::session::Session;
use anyhow::Result;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Wrong number of arguments
    ArgumentCount { usage: String },
    /// An argument is present but unusable
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// The command needs a checked-out branch
    DetachedHead { command: String },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::ArgumentCount { usage } => {
                write!(f, "Invalid given arguments, usage: {}", usage)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::DetachedHead { command } => {
                write!(f, "{} needs a checked-out branch, HEAD is detached", command)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert a validation error into a usage error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    GitpError::Usage(error.to_string()).into()
}

fn argument_count(usage: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::ArgumentCount {
        usage: usage.to_string(),
    })
}

/// Validate `fork <new-branch-name>`
pub fn validate_fork_args(args: &[String]) -> Result<&str> {
    match args {
        [branch] => {
            validate_branch_name(branch)?;
            Ok(branch)
        }
        _ => Err(argument_count("fork <new-branch-name>")),
    }
}

/// Validate `align <reference-branch>` against the current session
pub fn validate_align_args<'a>(args: &'a [String], session: &Session) -> Result<&'a str> {
    let [reference] = args else {
        return Err(argument_count("align <reference-branch>"));
    };
    validate_branch_name(reference)?;

    if session.is_detached() || session.branch().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::DetachedHead {
                command: "align".to_string(),
            },
        ));
    }
    if reference == session.branch() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "reference branch".to_string(),
                value: reference.clone(),
                reason: "it is the current branch".to_string(),
            },
        ));
    }
    Ok(reference)
}

/// Validate `checkout|switch <target> [args...]`
pub fn validate_switch_args(command: &str, args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(argument_count(&format!("{} <branch-name> [args...]", command)));
    }
    Ok(())
}

/// Validate a branch name given as a single argument
pub fn validate_branch_name(branch: &str) -> Result<()> {
    if branch.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "branch name".to_string(),
                value: branch.to_string(),
                reason: "branch name cannot be empty".to_string(),
            },
        ));
    }
    if branch.starts_with('-') {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "branch name".to_string(),
                value: branch.to_string(),
                reason: "branch name cannot start with '-'".to_string(),
            },
        ));
    }
    Ok(())
}
