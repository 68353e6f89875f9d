//! Configuration file discovery and loading.
//!
//! Lookup order:
//! 1. Explicit path (`--config` or `NRF_VERIFY_CONFIG`), which must exist
//! 2. `.nrf-verify.yml` in the project root
//! 3. Built-in defaults

use crate::config::schema::VerifyConfig;
use crate::config::validator::validate;
use crate::error::{Result, VerifyError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project-level configuration.
pub const CONFIG_FILE_NAME: &str = ".nrf-verify.yml";

/// Find the project config at `<project_root>/.nrf-verify.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into [`VerifyConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VerifyConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VerifyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VerifyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`VerifyConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VerifyConfig> {
    if content.trim().is_empty() {
        return Ok(VerifyConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| VerifyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the configuration for a run.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<VerifyConfig> {
    let config = match config_override {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => match find_project_config(project_root) {
            Some(path) => {
                tracing::debug!("Loading project config from {}", path.display());
                load_config_file(&path)?
            }
            None => {
                tracing::debug!("No config file found, using built-in requirements");
                VerifyConfig::default()
            }
        },
    };

    validate(&config)?;
    Ok(config)
}
