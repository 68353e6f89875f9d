//! The default verification command.

use std::path::{Path, PathBuf};

use crate::cli::args::VerifyArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::runner::{Verifier, VerifyOptions};
use crate::shell::{SystemRunner, ToolRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Loads the requirements, runs every check and prints the result.
pub struct VerifyCommand {
    project_root: PathBuf,
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a verify command.
    ///
    /// `--project` takes precedence over `default_root`.
    pub fn new(default_root: &Path, args: VerifyArgs) -> Self {
        let project_root = args
            .project
            .clone()
            .unwrap_or_else(|| default_root.to_path_buf());
        Self { project_root, args }
    }

    /// Project directory the checks run against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run with an explicit tool runner.
    pub fn execute_with(
        &self,
        runner: &dyn ToolRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.args.config.as_deref())?;

        let options = VerifyOptions {
            project_root: self.project_root.clone(),
            firmware_image: self.args.firmware_image(),
            assume_yes: self.args.yes,
        };

        let report = Verifier::new(&config, runner).run(&options, ui)?;

        if self.args.json {
            println!("{}", report.to_json(chrono::Utc::now())?);
        }

        if report.all_passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&SystemRunner::new(), ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerifyError;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn project_flag_overrides_default_root() {
        let args = VerifyArgs {
            project: Some(PathBuf::from("/work/app")),
            ..Default::default()
        };
        let command = VerifyCommand::new(Path::new("/cwd"), args);
        assert_eq!(command.project_root(), Path::new("/work/app"));

        let command = VerifyCommand::new(Path::new("/cwd"), VerifyArgs::default());
        assert_eq!(command.project_root(), Path::new("/cwd"));
    }

    #[test]
    fn invalid_project_config_aborts_before_checks() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".nrf-verify.yml"), "libraries: [").unwrap();
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        let err = VerifyCommand::new(temp.path(), VerifyArgs::default())
            .execute_with(&runner, &mut ui)
            .unwrap_err();

        assert!(matches!(err, VerifyError::ConfigParseError { .. }));
        assert!(runner.invocations().is_empty());
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let args = VerifyArgs {
            config: Some(temp.path().join("absent.yml")),
            ..Default::default()
        };

        let err = VerifyCommand::new(temp.path(), args)
            .execute_with(&MockRunner::new(), &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, VerifyError::ConfigNotFound { .. }));
    }
}
