//! Branch removal procedure behind `undo branch`
//!
//! ## Steps
//!
//! 1. Ask the remote whether the branch was pushed (`ls-remote --exit-code`
//!    on the full `refs/heads/<name>` ref, codes 1 and 2 mean "not there")
//! 2. Detach HEAD when the branch is the checked-out one
//! 3. Delete the remote branch, after confirmation unless pre-confirmed
//! 4. Delete the remote-tracking ref, falling back to a forced local delete;
//!    a local branch that outlives the tracking ref delete is force deleted too
//! 5. Prune stale remote-tracking refs
//!
//! Any failure stops the procedure. Completed steps are not rolled back:
//! a HEAD detached in step 2 stays detached.

use super::CommandContext;
use crate::constants::git::{LS_REMOTE_NOT_FOUND, SHOW_REF_NOT_FOUND};
use crate::git::Invocation;
use anyhow::Result;

/// One removal, built per `undo branch` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRemovalRequest {
    pub branch_name: String,
    pub is_currently_checked_out: bool,
    pub pre_confirmed: bool,
}

impl BranchRemovalRequest {
    pub fn new(context: &CommandContext<'_>, branch_name: &str, pre_confirmed: bool) -> Self {
        Self {
            branch_name: branch_name.to_string(),
            is_currently_checked_out: context.session.branch() == branch_name,
            pre_confirmed,
        }
    }
}

impl CommandContext<'_> {
    /// Remove `request.branch_name` locally and, when pushed, from the remote
    pub fn remove_branch(&mut self, request: &BranchRemovalRequest) -> Result<()> {
        let branch = request.branch_name.as_str();
        let remote = self.config.remote.clone();

        // A bare name would also match `refs/heads/<prefix>/<name>`
        let head_ref = format!("refs/heads/{}", branch);
        let listing = self.probe(
            &Invocation::new("ls-remote", ["--exit-code", remote.as_str(), head_ref.as_str()]),
            LS_REMOTE_NOT_FOUND,
        )?;
        let is_remote_branch = !listing.failed && !listing.stdout.is_empty();

        // A checked-out branch cannot be deleted
        if request.is_currently_checked_out {
            let hash = self.run(&Invocation::new("rev-parse", ["--short", "HEAD"]))?;
            self.run(&Invocation::new("checkout", ["--detach", hash.as_str()]))?;
            self.session.detach(&hash);
        }

        if is_remote_branch {
            let confirmed = request.pre_confirmed || self.console.confirm(branch, &remote)?;
            if confirmed {
                self.run(&Invocation::new("push", [remote.as_str(), "--delete", branch]))?;
            }
        }

        let tracking_ref = format!("{}/{}", remote, branch);
        let untrack = Invocation::new("branch", ["-rd", tracking_ref.as_str()]);
        let force_delete = match self.run(&untrack) {
            Ok(_) => self.has_local_branch(branch)?,
            Err(e) => {
                self.console.output(&e.to_string());
                true
            }
        };
        if force_delete {
            self.run(&Invocation::new("branch", ["-D", branch]))?;
        }

        self.run(&Invocation::new("fetch", ["--prune"]))?;
        Ok(())
    }

    fn has_local_branch(&mut self, branch: &str) -> Result<bool> {
        let local_ref = format!("refs/heads/{}", branch);
        let lookup = self.probe(
            &Invocation::new("show-ref", ["--verify", "--quiet", local_ref.as_str()]),
            SHOW_REF_NOT_FOUND,
        )?;
        Ok(!lookup.failed)
    }
}
