//! External tool execution and lookup.

pub mod command;
pub mod mock;
pub mod path;
pub mod platform;

pub use command::{format_command, CommandResult, SystemRunner, ToolRunner};
pub use mock::MockRunner;
pub use path::{resolve_tool_path, which};
pub use platform::is_ci;
