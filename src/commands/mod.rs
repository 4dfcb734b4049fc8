//! Command implementations

pub mod align;
pub mod base;
pub mod flow;
pub mod fork;
pub mod help;
pub mod passthrough;
pub mod remove;
pub mod undo;
pub mod update;
pub mod validators;

// Re-export the base types for easy access
pub use base::{Command, CommandContext};
pub use flow::Flow;

// Re-export all command implementations
pub use align::AlignCommand;
pub use fork::ForkCommand;
pub use help::HelpCommand;
pub use passthrough::PassthroughCommand;
pub use remove::BranchRemovalRequest;
pub use undo::{UndoAction, UndoCommand};
pub use update::UpdateCommand;
