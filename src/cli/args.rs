//! CLI argument definitions.
//!
//! Running `nrf-verify` with no subcommand performs the verification;
//! the only subcommand is `completions`.

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Verify an nRF Connect SDK development environment.
#[derive(Debug, Parser)]
#[command(name = "nrf-verify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub verify: VerifyArgs,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the verification run.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VerifyArgs {
    /// Program this modem firmware image after the checks
    #[arg(
        long,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub update_firmware: Option<PathBuf>,

    /// Show versions, paths and tool output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show failures and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a JSON report instead of the summary table
    #[arg(long)]
    pub json: bool,

    /// Do not ask before erasing and programming the modem
    #[arg(short, long)]
    pub yes: bool,

    /// Directory holding prj.conf, CMakeLists.txt and west.yml
    #[arg(short, long, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Requirements file (overrides <project>/.nrf-verify.yml)
    #[arg(short, long, value_name = "FILE", env = "NRF_VERIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl VerifyArgs {
    /// Firmware image to program. An empty path means no update.
    pub fn firmware_image(&self) -> Option<PathBuf> {
        self.update_firmware
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_runs_verification() {
        let cli = Cli::try_parse_from(["nrf-verify"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verify.update_firmware.is_none());
        assert_eq!(cli.verify.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn parses_update_firmware() {
        let cli = Cli::try_parse_from([
            "nrf-verify",
            "--update-firmware",
            "mfw_nrf9160_1.3.5.zip",
            "--yes",
        ])
        .unwrap();
        assert_eq!(
            cli.verify.update_firmware,
            Some(PathBuf::from("mfw_nrf9160_1.3.5.zip"))
        );
        assert!(cli.verify.yes);
        assert_eq!(
            cli.verify.firmware_image(),
            Some(PathBuf::from("mfw_nrf9160_1.3.5.zip"))
        );
    }

    #[test]
    fn empty_update_firmware_means_not_requested() {
        let cli = Cli::try_parse_from(["nrf-verify", "--update-firmware", ""]).unwrap();
        assert_eq!(cli.verify.update_firmware, Some(PathBuf::new()));
        assert!(cli.verify.firmware_image().is_none());
    }

    #[test]
    fn json_wins_over_other_modes() {
        let cli = Cli::try_parse_from(["nrf-verify", "--json", "--verbose"]).unwrap();
        assert_eq!(cli.verify.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["nrf-verify", "-v", "-q"]).is_err());
    }

    #[test]
    fn parses_completions() {
        let cli = Cli::try_parse_from(["nrf-verify", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Bash }))
        ));
    }
}
