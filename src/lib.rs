//! nrf-verify - nRF Connect SDK environment verification.
//!
//! Checks that a machine is ready to build cellular modem applications on
//! the nRF Connect SDK: environment variables, SDK library versions, modem
//! firmware, build tools and project configuration files. Optionally
//! programs a new modem firmware image.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and their outcome types
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Built-in requirement tables and YAML overrides
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Check orchestration and the aggregate report
//! - [`shell`] - External tool execution
//! - [`ui`] - Terminal output, spinners and prompts
//!
//! # Example
//!
//! ```
//! use nrf_verify::checks::evaluate_project_file;
//! use nrf_verify::config::VerifyConfig;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join("west.yml"), "- name: nrf\n- name: nrfxlib\n").unwrap();
//!
//! let config = VerifyConfig::default();
//! let west = config.project_files.iter().find(|f| f.file == "west.yml").unwrap();
//! assert!(evaluate_project_file(temp.path(), west).passed());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{Result, VerifyError};
