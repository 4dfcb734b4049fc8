//! Help command

use super::{Command, CommandContext};
use crate::git::Invocation;
use anyhow::Result;

/// `help [args...]`: gitp help followed by `git help [args...]`
pub struct HelpCommand {
    pub args: Vec<String>,
}

impl Command for HelpCommand {
    fn execute(&self, context: &mut CommandContext<'_>) -> Result<()> {
        let invocation = Invocation::new("help", self.args.iter().cloned());
        let git_help = context.git.run(&invocation)?.into_result()?;
        context.console.help(&git_help);
        Ok(())
    }
}
