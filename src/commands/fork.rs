//! Fork flow: update the current branch and branch off it

use super::{Command, CommandContext, Flow};
use anyhow::Result;

/// `fork <branch>`: update, create the branch and publish it upstream
pub struct ForkCommand {
    pub branch: String,
}

impl ForkCommand {
    pub fn new(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
        }
    }

    pub fn flow(&self, remote: &str) -> Flow {
        Flow::new("fork")
            .stash_protected(true)
            .step(["fetch"])
            .step(["pull"])
            .step(["checkout", "-b", self.branch.as_str()])
            .step(["push", "--set-upstream", remote, self.branch.as_str()])
    }
}

impl Command for ForkCommand {
    fn execute(&self, context: &mut CommandContext<'_>) -> Result<()> {
        let flow = self.flow(&context.config.remote);
        context.run_flow(&flow)?;
        context.session.set_branch(self.branch.as_str());
        Ok(())
    }
}
