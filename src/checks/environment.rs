//! Environment preconditions and SDK location.
//!
//! Both checks here are fatal: a failure aborts the run before any other
//! check executes.

use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::config::EnvironmentConfig;
use crate::error::{Result, VerifyError};
use crate::ui::UserInterface;

/// Paths read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentPaths {
    /// Value of the Zephyr base variable
    pub zephyr_base: PathBuf,
    /// Value of the toolchain variable
    pub toolchain: PathBuf,
}

/// Read the required environment variables from the process environment.
pub fn read_environment(config: &EnvironmentConfig) -> Result<EnvironmentPaths> {
    read_environment_with(config, |key| std::env::var(key))
}

/// Read the required environment variables using a custom lookup.
///
/// A variable that is unset or empty counts as missing. Every missing
/// variable is named in the returned error.
pub fn read_environment_with<F>(config: &EnvironmentConfig, env_fn: F) -> Result<EnvironmentPaths>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let lookup = |key: &str| env_fn(key).ok().filter(|value| !value.is_empty());

    let zephyr_base = lookup(&config.sdk_var);
    let toolchain = lookup(&config.toolchain_var);

    match (zephyr_base, toolchain) {
        (Some(zephyr_base), Some(toolchain)) => Ok(EnvironmentPaths {
            zephyr_base: PathBuf::from(zephyr_base),
            toolchain: PathBuf::from(toolchain),
        }),
        (zephyr_base, toolchain) => {
            let mut vars = Vec::new();
            if zephyr_base.is_none() {
                vars.push(config.sdk_var.clone());
            }
            if toolchain.is_none() {
                vars.push(config.toolchain_var.clone());
            }
            tracing::debug!("Missing environment variables: {:?}", vars);
            Err(VerifyError::MissingEnvironment { vars })
        }
    }
}

/// Resolve the SDK directory as `parent(zephyr_base)/<sdk_subdir>`.
pub fn resolve_sdk_path(zephyr_base: &Path, sdk_subdir: &str) -> Result<PathBuf> {
    let parent = zephyr_base
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| VerifyError::SdkNotFound {
            path: zephyr_base.join("..").join(sdk_subdir),
        })?;

    let sdk_path = parent.join(sdk_subdir);
    tracing::debug!("Looking for SDK at {}", sdk_path.display());

    if sdk_path.is_dir() {
        Ok(sdk_path)
    } else {
        Err(VerifyError::SdkNotFound { path: sdk_path })
    }
}

/// Run both environment checks and report the SDK location.
///
/// Returns the SDK path on success. A toolchain path that is set but is not
/// a directory only produces a warning.
pub fn check_environment<F>(
    config: &EnvironmentConfig,
    env_fn: F,
    ui: &mut dyn UserInterface,
) -> Result<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let paths = read_environment_with(config, env_fn)?;

    if !paths.toolchain.is_dir() {
        ui.warning(&format!(
            "Toolchain path is not a directory: {}",
            paths.toolchain.display()
        ));
    }

    let sdk_path = resolve_sdk_path(&paths.zephyr_base, &config.sdk_subdir)?;
    ui.success(&format!("Found nRF Connect SDK at: {}", sdk_path.display()));
    ui.detail(&format!("{}: {}", config.sdk_var, paths.zephyr_base.display()));
    ui.detail(&format!("{}: {}", config.toolchain_var, paths.toolchain.display()));

    Ok(sdk_path)
}
