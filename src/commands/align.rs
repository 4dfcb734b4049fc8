//! Align flow: merge an up-to-date reference branch into the current one

use super::{Command, CommandContext, Flow};
use anyhow::Result;

/// `align <reference>`: update both branches, then merge reference into current
pub struct AlignCommand {
    pub current: String,
    pub reference: String,
}

impl AlignCommand {
    pub fn new(current: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            reference: reference.into(),
        }
    }

    pub fn flow(&self) -> Flow {
        Flow::new(format!("align {}", self.reference))
            .stash_protected(true)
            .step(["fetch"])
            .step(["pull"])
            .step(["checkout", self.reference.as_str()])
            .step(["pull"])
            .step(["checkout", self.current.as_str()])
            .step(["merge", self.reference.as_str()])
    }
}

impl Command for AlignCommand {
    fn execute(&self, context: &mut CommandContext<'_>) -> Result<()> {
        context.run_flow(&self.flow())
    }
}
