//! Presentation layer
//!
//! The orchestration code reports through the [`Console`] trait and never
//! touches colors or stdio directly. [`Terminal`] is the colored stdio
//! implementation used by the binary.

pub mod confirm;
pub mod help;
pub mod terminal;

pub use confirm::parse_confirmation;
pub use terminal::Terminal;

use crate::git::Invocation;
use crate::session::Session;
use anyhow::Result;
use std::fmt::Display;

/// Sink for everything gitp shows the user, plus the two ways it reads input
pub trait Console {
    /// Print the prompt line made of the repository and branch labels
    fn cursor(&mut self, session: &Session);

    fn flow_start(&mut self, name: &str);

    fn flow_end(&mut self, name: &str);

    /// Echo an invocation before it runs
    fn command(&mut self, invocation: &Invocation);

    fn output(&mut self, text: &str);

    fn warning(&mut self, message: &dyn Display);

    fn error(&mut self, error: &dyn Display);

    /// Print the composed gitp help followed by git's own help text
    fn help(&mut self, git_help: &str);

    /// Ask whether `branch` should also be deleted from `remote`
    ///
    /// # Errors
    ///
    /// Returns a prompt error when the answer is neither affirmative nor
    /// negative, or when stdin cannot be read.
    fn confirm(&mut self, branch: &str, remote: &str) -> Result<bool>;

    /// Read the next line of interactive input, `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns an error when stdin cannot be read.
    fn read_line(&mut self) -> Result<Option<String>>;
}
