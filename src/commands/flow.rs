//! Command flows: ordered invocations with optional stash protection
//!
//! A flow runs its steps one after the other and stops at the first failure.
//! When stash protection is on and the working tree has local changes, those
//! changes are stashed before the first step and popped after the last one.
//! A failed step leaves the stash in place.

use super::CommandContext;
use crate::git::Invocation;
use anyhow::Result;

/// A named sequence of invocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    name: String,
    stash_protected: bool,
    steps: Vec<Vec<String>>,
}

impl Flow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stash_protected: false,
            steps: Vec::new(),
        }
    }

    /// Wrap the steps in an automatic stash and pop on a dirty tree
    pub fn stash_protected(mut self, protected: bool) -> Self {
        self.stash_protected = protected;
        self
    }

    /// Append a step; an empty token list is kept and skipped at run time
    pub fn step<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.push(tokens.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_stash_protected(&self) -> bool {
        self.stash_protected
    }

    pub fn steps(&self) -> &[Vec<String>] {
        &self.steps
    }
}

impl CommandContext<'_> {
    /// Run a flow, framed by start and end banners
    pub fn run_flow(&mut self, flow: &Flow) -> Result<()> {
        self.console.flow_start(flow.name());

        if flow.is_stash_protected() {
            self.with_stash(|ctx| ctx.run_steps(flow.steps()))?;
        } else {
            self.run_steps(flow.steps())?;
        }

        self.console.flow_end(flow.name());
        Ok(())
    }

    /// Run `guarded` with local changes stashed away
    ///
    /// The tree is checked with `status`; only when it reports tracked
    /// changes is a stash pushed, and only a pushed stash is popped, after
    /// `guarded` succeeds.
    pub fn with_stash<T>(&mut self, guarded: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let status = self.run(&Invocation::new(
            "status",
            ["--porcelain=v1", "--untracked-files=no"],
        ))?;

        let stashed = !status.is_empty();
        if stashed {
            self.run(&Invocation::new("stash", ["push"]))?;
        }

        match guarded(self) {
            Ok(value) => {
                if stashed {
                    self.run(&Invocation::new("stash", ["pop"]))?;
                }
                Ok(value)
            }
            Err(e) => {
                if stashed {
                    self.console.warning(
                        &"Local changes are still stashed, run 'git stash pop' to restore them",
                    );
                }
                Err(e)
            }
        }
    }

    fn run_steps(&mut self, steps: &[Vec<String>]) -> Result<()> {
        for invocation in steps.iter().filter_map(|step| Invocation::from_tokens(step)) {
            self.run(&invocation)?;
        }
        Ok(())
    }
}
