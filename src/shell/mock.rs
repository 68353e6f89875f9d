//! Scripted tool runner for testing.
//!
//! `MockRunner` implements [`ToolRunner`] without spawning processes.
//! Tools that have not been scripted behave as if they are not installed.
//!
//! # Example
//!
//! ```
//! use nrf_verify::shell::{MockRunner, ToolRunner};
//!
//! let runner = MockRunner::new().with_success("cmake", "cmake version 3.27.4\n");
//!
//! assert!(runner.run("cmake", &["--version"]).unwrap().success);
//! assert!(runner.run("ninja", &["--version"]).is_err());
//! assert_eq!(runner.invocations(), ["cmake --version", "ninja --version"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Result, VerifyError};

use super::command::{format_command, CommandResult, ToolRunner};

/// Tool runner that returns pre-configured results.
///
/// Results can be registered per program name or per full command line;
/// a full command line match wins over a program name match.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, CommandResult>,
    invocations: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every tool is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a result for a program name or full command line.
    pub fn with_result(mut self, key: &str, result: CommandResult) -> Self {
        self.responses.insert(key.to_string(), result);
        self
    }

    /// Register a successful run printing `stdout`.
    pub fn with_success(self, key: &str, stdout: &str) -> Self {
        self.with_result(
            key,
            CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO),
        )
    }

    /// Register a failed run with the given exit code and stderr.
    pub fn with_failure(self, key: &str, exit_code: i32, stderr: &str) -> Self {
        self.with_result(
            key,
            CommandResult::failure(
                Some(exit_code),
                String::new(),
                stderr.to_string(),
                Duration::ZERO,
            ),
        )
    }

    /// Command lines that were run, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }
}

impl ToolRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        let line = format_command(program, args);
        self.invocations.borrow_mut().push(line.clone());

        self.responses
            .get(&line)
            .or_else(|| self.responses.get(program))
            .cloned()
            .ok_or_else(|| VerifyError::ToolNotFound {
                tool: program.to_string(),
            })
    }
}
