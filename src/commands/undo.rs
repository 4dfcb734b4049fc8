//! Undo shortcuts
//!
//! `undo <keyword> [args...]` maps each keyword to the git command that
//! reverts it. Extra arguments are passed through after the fixed ones.
//!
//! | keyword       | runs                                   |
//! |---------------|----------------------------------------|
//! | `commit`      | `reset HEAD~1 [args...]`               |
//! | `merge`       | `merge --abort [args...]`              |
//! | `stash`       | `stash pop [args...]`                  |
//! | `upstream`    | `branch --unset-upstream [args...]`    |
//! | `add`/`stage` | `restore --staged [args...]`           |
//! | `branch`      | the branch removal procedure           |
//! | `fork`        | `undo branch <name> --confirm`         |

use super::remove::BranchRemovalRequest;
use super::{Command, CommandContext};
use crate::constants::cli::{CONFIRM_FLAGS, UNDO_USAGE};
use crate::errors::GitpError;
use crate::git::Invocation;
use anyhow::Result;

const UNDO_BRANCH_USAGE: &str = "undo branch [<branch-name>] [--confirm]";
const UNDO_FORK_USAGE: &str = "undo fork <branch-name>";

/// Which branch `undo branch` removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTarget {
    /// Explicit name, `None` for the checked-out branch
    pub name: Option<String>,
    pub pre_confirmed: bool,
}

/// A parsed undo request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// Run a single corrective invocation
    Single(Invocation),
    /// Run the branch removal procedure
    Branch(BranchTarget),
}

impl UndoAction {
    /// Parse the arguments following `undo`
    pub fn parse(args: &[String]) -> Result<Self> {
        let Some((keyword, extra)) = args.split_first() else {
            return Err(usage(UNDO_USAGE));
        };

        let single = |command: &str, fixed: &str| -> Result<UndoAction> {
            Ok(UndoAction::Single(Invocation::new(
                command,
                std::iter::once(fixed.to_string()).chain(extra.iter().cloned()),
            )))
        };

        match keyword.as_str() {
            "commit" => single("reset", "HEAD~1"),
            "merge" => single("merge", "--abort"),
            "stash" => single("stash", "pop"),
            "upstream" => single("branch", "--unset-upstream"),
            "add" | "stage" => single("restore", "--staged"),
            "branch" => parse_branch_target(extra).map(UndoAction::Branch),
            "fork" => match extra {
                [name] if !is_confirm_flag(name) => Ok(UndoAction::Branch(BranchTarget {
                    name: Some(name.clone()),
                    pre_confirmed: true,
                })),
                _ => Err(usage(UNDO_FORK_USAGE)),
            },
            _ => Err(GitpError::Usage(format!(
                "Unrecognized argument '{}', usage: {}",
                keyword, UNDO_USAGE
            ))
            .into()),
        }
    }
}

/// Branch name and confirmation flag, in either order, both optional
fn parse_branch_target(extra: &[String]) -> Result<BranchTarget> {
    let target = |name: Option<&String>, pre_confirmed: bool| BranchTarget {
        name: name.cloned(),
        pre_confirmed,
    };

    match extra {
        [] => Ok(target(None, false)),
        [flag] if is_confirm_flag(flag) => Ok(target(None, true)),
        [name] => Ok(target(Some(name), false)),
        [flag, name] if is_confirm_flag(flag) && !is_confirm_flag(name) => {
            Ok(target(Some(name), true))
        }
        [name, flag] if is_confirm_flag(flag) && !is_confirm_flag(name) => {
            Ok(target(Some(name), true))
        }
        _ => Err(usage(UNDO_BRANCH_USAGE)),
    }
}

fn is_confirm_flag(token: &str) -> bool {
    CONFIRM_FLAGS.contains(&token)
}

fn usage(usage: &str) -> anyhow::Error {
    GitpError::Usage(format!("Invalid given arguments, usage: {}", usage)).into()
}

/// `undo <keyword> [args...]`
pub struct UndoCommand {
    pub action: UndoAction,
}

impl UndoCommand {
    pub fn parse(args: &[String]) -> Result<Self> {
        Ok(Self {
            action: UndoAction::parse(args)?,
        })
    }
}

impl Command for UndoCommand {
    fn execute(&self, context: &mut CommandContext<'_>) -> Result<()> {
        match &self.action {
            UndoAction::Single(invocation) => context.run(invocation).map(|_| ()),
            UndoAction::Branch(target) => {
                let session = &context.session;
                let branch = match &target.name {
                    Some(name) => name.clone(),
                    None if session.is_detached() || session.branch().is_empty() => {
                        return Err(GitpError::Usage(format!(
                            "No branch is checked out, usage: {}",
                            UNDO_BRANCH_USAGE
                        ))
                        .into());
                    }
                    None => session.branch().to_string(),
                };

                let request = BranchRemovalRequest::new(context, &branch, target.pre_confirmed);
                let flow_name = format!("undo branch {}", branch);

                context.console.flow_start(&flow_name);
                context.with_stash(|ctx| ctx.remove_branch(&request))?;
                context.console.flow_end(&flow_name);
                Ok(())
            }
        }
    }
}
