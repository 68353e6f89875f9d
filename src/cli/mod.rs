//! Command-line interface for nrf-verify.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, VerifyArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
