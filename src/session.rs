//! Per-run session state: current branch label and repository name

use crate::constants::git::DETACHED_SUFFIX;
use crate::git::{GitRunner, Invocation};
use anyhow::Result;
use std::path::Path;

/// Labels shown in the cursor and used by branch-aware commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    branch: String,
    directory: String,
}

impl Session {
    pub fn new(branch: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            directory: directory.into(),
        }
    }

    /// Current branch label, `<hash> [detached]` when HEAD is detached
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Name of the repository root directory
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn is_detached(&self) -> bool {
        self.branch.ends_with(DETACHED_SUFFIX)
    }

    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    /// Record that HEAD now points directly at `short_hash`
    pub fn detach(&mut self, short_hash: &str) {
        self.branch = format!("{}{}", short_hash, DETACHED_SUFFIX);
    }

    /// Re-read both labels from the repository
    ///
    /// On failure the session is left untouched.
    pub fn refresh(&mut self, git: &dyn GitRunner) -> Result<()> {
        let branch = query(git, &["branch", "--show-current"])?;
        let branch = if branch.is_empty() {
            let hash = query(git, &["rev-parse", "--short", "HEAD"])?;
            format!("{}{}", hash, DETACHED_SUFFIX)
        } else {
            branch
        };

        let toplevel = query(git, &["rev-parse", "--show-toplevel"])?;
        let directory = Path::new(&toplevel)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or(toplevel);

        self.branch = branch;
        self.directory = directory;
        Ok(())
    }
}

fn query(git: &dyn GitRunner, tokens: &[&str]) -> Result<String> {
    let invocation = Invocation::from_tokens(tokens)
        .ok_or_else(|| anyhow::anyhow!("empty session query"))?;
    Ok(git.run(&invocation)?.into_result()?)
}
