//! Plain git commands run verbatim

use super::{Command, CommandContext};
use crate::git::Invocation;
use anyhow::Result;

/// Any command gitp does not handle itself
///
/// Commands that can move HEAD or create a repository (`init`, `clone`,
/// `checkout`, `switch`) refresh the session once they succeed.
pub struct PassthroughCommand {
    pub invocation: Invocation,
    pub refresh_session: bool,
}

impl PassthroughCommand {
    pub fn new(invocation: Invocation) -> Self {
        Self {
            invocation,
            refresh_session: false,
        }
    }

    pub fn refreshing(invocation: Invocation) -> Self {
        Self {
            invocation,
            refresh_session: true,
        }
    }
}

impl Command for PassthroughCommand {
    fn execute(&self, context: &mut CommandContext<'_>) -> Result<()> {
        context.run(&self.invocation)?;
        if self.refresh_session {
            context.refresh_session();
        }
        Ok(())
    }
}
