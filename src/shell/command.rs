//! External tool execution.
//!
//! Tools are spawned directly (no intermediate shell) with captured
//! stdout/stderr. Every call blocks until the child exits; there is no
//! timeout.

use crate::error::{Result, VerifyError};
use std::process::Command;
use std::time::{Duration, Instant};

/// Result of executing an external tool.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Combined stdout and stderr, for tools that print versions to stderr.
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Seam between the checkers and the processes they spawn.
///
/// Implementations return [`VerifyError::ToolNotFound`] when the program
/// cannot be located, so checkers can tell a missing tool apart from one
/// that ran and failed.
pub trait ToolRunner {
    /// Run `program` with `args` and capture its output.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult>;
}

/// Runs tools on the host system via [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult> {
        let command_line = format_command(program, args);
        tracing::debug!("Executing: {}", command_line);

        let start = Instant::now();
        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VerifyError::ToolNotFound {
                    tool: program.to_string(),
                }
            } else {
                tracing::debug!("Failed to spawn {}: {}", program, e);
                VerifyError::CommandFailed {
                    command: command_line.clone(),
                    code: None,
                }
            }
        })?;
        let duration = start.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            program,
            output.status.code(),
            duration
        );

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}

/// Render a program and its arguments as a single display string.
pub fn format_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_command_joins_args() {
        assert_eq!(
            format_command("nrfjprog", &["--memrd", "0x00", "0x100"]),
            "nrfjprog --memrd 0x00 0x100"
        );
        assert_eq!(format_command("cmake", &[]), "cmake");
    }

    #[test]
    fn combined_output_concatenates_streams() {
        let result = CommandResult::success(
            "out\n".to_string(),
            "err\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.combined_output(), "out\nerr\n");
    }

    #[test]
    fn failure_result_is_not_success() {
        let result = CommandResult::failure(Some(2), String::new(), "boom".into(), Duration::ZERO);
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(2));
    }

    #[test]
    fn missing_program_is_tool_not_found() {
        let err = SystemRunner::new()
            .run("this-command-does-not-exist-12345", &["--version"])
            .unwrap_err();
        assert!(matches!(err, VerifyError::ToolNotFound { ref tool } if tool == "this-command-does-not-exist-12345"));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_stdout() {
        let result = SystemRunner::new().run("echo", &["hello"]).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_non_zero_exit() {
        let result = SystemRunner::new().run("sh", &["-c", "echo nope >&2; exit 3"]).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("nope"));
    }
}
