//! gitp - git plus: command flows, undo shortcuts and an interactive terminal on top of git

pub mod commands;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod errors;
pub mod git;
pub mod session;
pub mod ui;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use dispatcher::Gitp;
pub use errors::GitpError;
pub use git::{GitRunner, Invocation, InvocationResult, SystemGit};
pub use session::Session;
pub use ui::{Console, Terminal};
