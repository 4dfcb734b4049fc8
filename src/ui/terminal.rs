//! Colored stdio console

use super::{Console, help, parse_confirmation};
use crate::constants;
use crate::errors::GitpError;
use crate::git::Invocation;
use crate::session::Session;
use anyhow::{Context, Result};
use colored::*;
use std::fmt::Display;
use std::io::{self, Write};

/// Console writing colored text to stdout and reading answers from stdin
///
/// Command echoes are prefixed with the configured binary name.
///
/// ## Example
///
/// ```rust,no_run
/// use gitp::{Console, Session, Terminal};
///
/// let mut terminal = Terminal::new("git");
/// terminal.cursor(&Session::new("main", "my-repo"));
/// terminal.flow_start("update");
/// terminal.flow_end("update");
/// ```
#[derive(Debug)]
pub struct Terminal {
    binary: String,
}

impl Terminal {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn command_line(&self, invocation: &Invocation) -> String {
        format!("{} {}", self.binary, invocation)
    }

    fn flush() {
        // A broken stdout also breaks every later print, nothing to recover here
        io::stdout().flush().ok();
    }

    fn read_stdin_line() -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok((read > 0).then_some(line))
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(constants::git::DEFAULT_BINARY)
    }
}

impl Console for Terminal {
    fn cursor(&mut self, session: &Session) {
        print!(
            "{}{} ► ",
            format!(" {} ", session.directory()).white().on_blue(),
            format!(" {} ", session.branch()).white().on_bright_blue(),
        );
        Self::flush();
    }

    fn flow_start(&mut self, name: &str) {
        println!(
            "{}executing {} command flow",
            " » ".green(),
            format!("git+ {}", name).bright_magenta()
        );
    }

    fn flow_end(&mut self, name: &str) {
        println!(
            "{}{} executed successfully",
            " ✓ ".green(),
            format!("git+ {}", name).bright_magenta()
        );
    }

    fn command(&mut self, invocation: &Invocation) {
        print!("• {}: ", self.command_line(invocation).bright_magenta());
        Self::flush();
    }

    fn output(&mut self, text: &str) {
        println!("{}", text.bright_yellow());
    }

    fn warning(&mut self, message: &dyn Display) {
        println!(
            "{}{}",
            " ! ".black().on_bright_yellow(),
            format!(" {} ", message).bright_white().on_yellow()
        );
    }

    fn error(&mut self, error: &dyn Display) {
        eprintln!(
            "{}{}",
            " ERROR ".bright_white().on_red(),
            format!(" - {} ", error).black().on_bright_red()
        );
    }

    fn help(&mut self, git_help: &str) {
        print!("{}", help::usage_text());
        println!("{}", " Git Help ".white().on_blue());
        println!("{}", git_help.bright_yellow());
    }

    fn confirm(&mut self, branch: &str, remote: &str) -> Result<bool> {
        self.warning(&"This action is not reversible");
        print!(
            "\nConfirm: delete branch {} also from {}?\n\t[{}] | {} ► ",
            format!(" {} ", branch).white().on_bright_blue(),
            remote,
            " Yes ".white().on_green(),
            " No ".white().on_red()
        );
        Self::flush();

        let answer = Self::read_stdin_line()
            .map_err(|e| GitpError::Prompt(format!("Unable to read confirmation: {}", e)))?
            .ok_or_else(|| GitpError::Prompt("No confirmation given".to_string()))?;

        Ok(parse_confirmation(&answer)?)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Self::read_stdin_line()
    }
}
