//! Update flow: bring the current branch up to date with its remote

use super::{Command, CommandContext, Flow};
use anyhow::Result;

/// `update`: fetch then pull, stash-protected
pub struct UpdateCommand;

impl UpdateCommand {
    pub fn flow() -> Flow {
        Flow::new("update")
            .stash_protected(true)
            .step(["fetch"])
            .step(["pull"])
    }
}

impl Command for UpdateCommand {
    fn execute(&self, context: &mut CommandContext<'_>) -> Result<()> {
        context.run_flow(&Self::flow())
    }
}
