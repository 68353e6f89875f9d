//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Verification is the default command; the only
//! subcommand is `completions`.

pub mod completions;
pub mod dispatcher;
pub mod verify;

pub use completions::CompletionsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use verify::VerifyCommand;
