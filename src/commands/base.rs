//! Base types and traits for the command pattern

use crate::config::Config;
use crate::errors::GitpError;
use crate::git::{GitRunner, Invocation, InvocationResult};
use crate::session::Session;
use crate::ui::Console;
use anyhow::Result;

/// Context passed to all commands: the process boundary, the presentation
/// sink, the session being tracked and the loaded configuration
pub struct CommandContext<'a> {
    /// Runs the external binary
    pub git: &'a dyn GitRunner,
    /// Receives everything shown to the user
    pub console: &'a mut dyn Console,
    /// Branch and repository labels, updated by commands that move HEAD
    pub session: &'a mut Session,
    /// The loaded configuration
    pub config: &'a Config,
}

impl CommandContext<'_> {
    /// Echo and run an invocation, showing its output on success
    ///
    /// A non-zero exit becomes a [`GitpError::ExternalCommand`]
    /// carrying the exit code and output.
    pub fn run(&mut self, invocation: &Invocation) -> Result<String> {
        self.console.command(invocation);
        let output = self.git.run(invocation)?.into_result()?;
        self.console.output(&output);
        Ok(output)
    }

    /// Echo and run an invocation whose failure codes in `benign` are answers
    ///
    /// The output is shown whatever the outcome. Codes outside `benign`
    /// fail like [`CommandContext::run`].
    pub fn probe(&mut self, invocation: &Invocation, benign: &[i32]) -> Result<InvocationResult> {
        self.console.command(invocation);
        let result = self.git.run(invocation)?;
        self.console.output(&result.stdout);

        if result.failed {
            let error = GitpError::ExternalCommand {
                code: result.exit_code,
                output: result.stdout.clone(),
            };
            if !error.is_benign(benign) {
                return Err(error.into());
            }
        }
        Ok(result)
    }

    /// Re-read the session labels, downgrading a failure to a warning
    pub fn refresh_session(&mut self) -> bool {
        match self.session.refresh(self.git) {
            Ok(()) => true,
            Err(e) => {
                self.console
                    .warning(&format!("Unable to read branch and repository: {}", e));
                false
            }
        }
    }
}

/// Trait that all commands must implement
pub trait Command {
    /// Execute the command with the given context
    fn execute(&self, context: &mut CommandContext<'_>) -> Result<()>;
}
