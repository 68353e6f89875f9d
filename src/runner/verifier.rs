//! Verification orchestration.

use std::env::VarError;
use std::path::PathBuf;

use crate::checks::{
    check_dependencies, check_environment, check_libraries, check_modem, check_project_files,
    update_firmware, FirmwareUpdateStatus,
};
use crate::config::VerifyConfig;
use crate::error::Result;
use crate::shell::ToolRunner;
use crate::ui::UserInterface;

use super::report::VerificationReport;

/// Banner printed before the checks.
pub const HEADER: &str = "nRF Library Verification Tool";

/// Options for a verification run.
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    /// Directory holding the project configuration files
    pub project_root: PathBuf,
    /// Firmware image to program after the checks
    pub firmware_image: Option<PathBuf>,
    /// Skip the erase confirmation
    pub assume_yes: bool,
}

/// Runs every check in order and collects the aggregate flags.
pub struct Verifier<'a> {
    config: &'a VerifyConfig,
    runner: &'a dyn ToolRunner,
}

impl<'a> Verifier<'a> {
    /// Create a verifier over the given requirements and tool runner.
    pub fn new(config: &'a VerifyConfig, runner: &'a dyn ToolRunner) -> Self {
        Self { config, runner }
    }

    /// Run against the process environment.
    pub fn run(
        &self,
        options: &VerifyOptions,
        ui: &mut dyn UserInterface,
    ) -> Result<VerificationReport> {
        self.run_with_env(options, |key| std::env::var(key), ui)
    }

    /// Run with a custom environment lookup.
    ///
    /// Missing environment variables and a missing SDK directory are
    /// returned as errors before any other check runs. Every other failure
    /// is recorded in the report.
    pub fn run_with_env<F>(
        &self,
        options: &VerifyOptions,
        env_fn: F,
        ui: &mut dyn UserInterface,
    ) -> Result<VerificationReport>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        ui.show_header(HEADER);

        let sdk_path = check_environment(&self.config.environment, env_fn, ui)?;

        let libraries_ok = check_libraries(&sdk_path, &self.config.libraries, ui);
        let modem_ok = check_modem(self.runner, &self.config.programmer, ui);
        let dependencies_ok = check_dependencies(self.runner, &self.config.dependencies, ui);
        let config_ok =
            check_project_files(&options.project_root, &self.config.project_files, ui);

        let firmware_update = match &options.firmware_image {
            Some(image) => update_firmware(
                self.runner,
                &self.config.programmer,
                Some(image.as_path()),
                options.assume_yes,
                ui,
            ),
            None => FirmwareUpdateStatus::NotRequested,
        };

        let report = VerificationReport {
            sdk_path,
            libraries_ok,
            modem_ok,
            dependencies_ok,
            config_ok,
            firmware_update,
        };

        tracing::debug!(
            "libraries={} modem={} dependencies={} config={} firmware={}",
            report.libraries_ok,
            report.modem_ok,
            report.dependencies_ok,
            report.config_ok,
            report.firmware_ok()
        );

        ui.show_summary(&report.summary_rows(), report.all_passed());
        Ok(report)
    }
}
