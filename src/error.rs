//! Error types for nrf-verify operations.
//!
//! This module defines [`VerifyError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal preconditions (missing environment, missing SDK) abort the run
//! - Soft check failures never surface as errors; checkers turn them into
//!   printed lines and aggregate flags
//! - `ToolNotFound` is raised at the process seam and caught by each checker

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nrf-verify operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// One or more required environment variables are unset or empty.
    #[error("Missing environment variables: {}", vars.join(", "))]
    MissingEnvironment { vars: Vec<String> },

    /// The nRF Connect SDK directory could not be located.
    #[error("nRF Connect SDK not found at {path}")]
    SdkNotFound { path: PathBuf },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// External executable is not installed or not on PATH.
    #[error("{tool} not found")]
    ToolNotFound { tool: String },

    /// External executable could not be started for another reason.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for nrf-verify operations.
pub type Result<T> = std::result::Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_environment_lists_all_vars() {
        let err = VerifyError::MissingEnvironment {
            vars: vec!["ZEPHYR_BASE".into(), "GNUARMEMB_TOOLCHAIN_PATH".into()],
        };
        assert_eq!(
            err.to_string(),
            "Missing environment variables: ZEPHYR_BASE, GNUARMEMB_TOOLCHAIN_PATH"
        );
    }

    #[test]
    fn sdk_not_found_displays_path() {
        let err = VerifyError::SdkNotFound {
            path: PathBuf::from("/opt/ncs/nrf"),
        };
        assert!(err.to_string().contains("/opt/ncs/nrf"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = VerifyError::ConfigParseError {
            path: PathBuf::from("/project/.nrf-verify.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".nrf-verify.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn tool_not_found_names_tool() {
        let err = VerifyError::ToolNotFound {
            tool: "nrfjprog".into(),
        };
        assert_eq!(err.to_string(), "nrfjprog not found");
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = VerifyError::CommandFailed {
            command: "nrfjprog --memrd 0x00".into(),
            code: Some(33),
        };
        let msg = err.to_string();
        assert!(msg.contains("nrfjprog --memrd 0x00"));
        assert!(msg.contains("33"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VerifyError = io_err.into();
        assert!(matches!(err, VerifyError::Io(_)));
    }
}
