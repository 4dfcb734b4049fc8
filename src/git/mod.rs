//! Git process boundary
//!
//! Every effect gitp has on a repository goes through the [`GitRunner`]
//! trait, which runs one [`Invocation`] of the external binary and returns an
//! [`InvocationResult`].
//!
//! ## Sub-modules
//!
//! - [`invocation`]: the invocation and result value types
//! - [`runner`]: the runner trait and the [`SystemGit`] process implementation

pub mod invocation;
pub mod runner;

pub use invocation::{Invocation, InvocationResult};
pub use runner::{GitRunner, SystemGit};
