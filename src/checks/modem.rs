//! Modem firmware inspection through the hardware programmer.

use regex::Regex;

use crate::config::ProgrammerConfig;
use crate::error::VerifyError;
use crate::shell::{format_command, ToolRunner};
use crate::ui::UserInterface;

use super::status::ModemStatus;

/// Read the modem firmware region and classify the result.
pub fn evaluate_modem(runner: &dyn ToolRunner, programmer: &ProgrammerConfig) -> ModemStatus {
    let args: Vec<&str> = programmer.read_args.iter().map(String::as_str).collect();
    tracing::debug!(
        "Reading modem firmware: {}",
        format_command(&programmer.tool, &args)
    );

    let result = match runner.run(&programmer.tool, &args) {
        Ok(result) => result,
        Err(VerifyError::ToolNotFound { tool }) => return ModemStatus::ToolNotFound { tool },
        Err(e) => {
            return ModemStatus::Inaccessible {
                exit_code: None,
                stderr: e.to_string(),
            }
        }
    };

    if !result.success {
        return ModemStatus::Inaccessible {
            exit_code: result.exit_code,
            stderr: result.stderr.trim().to_string(),
        };
    }

    if result.stdout.contains(&programmer.firmware_marker) {
        ModemStatus::Verified {
            firmware_version: firmware_version(&result.stdout, &programmer.firmware_marker),
        }
    } else {
        ModemStatus::UnexpectedFirmware
    }
}

/// Extract `<marker>_x.y.z` from a memory dump.
pub fn firmware_version(dump: &str, marker: &str) -> Option<String> {
    let pattern = format!(r"{}_\d+\.\d+\.\d+", regex::escape(marker));
    Regex::new(&pattern)
        .ok()?
        .find(dump)
        .map(|m| m.as_str().to_string())
}

/// Check the modem firmware and report. Returns the modem flag.
pub fn check_modem(
    runner: &dyn ToolRunner,
    programmer: &ProgrammerConfig,
    ui: &mut dyn UserInterface,
) -> bool {
    ui.show_section("Checking modem firmware:");

    let mut spinner = ui.start_spinner("Reading modem firmware...");
    let status = evaluate_modem(runner, programmer);
    spinner.finish();

    match &status {
        ModemStatus::Verified { firmware_version } => {
            ui.success("Modem firmware accessible");
            match firmware_version {
                Some(version) => {
                    ui.success(&format!("Modem firmware version verified: {}", version))
                }
                None => ui.success("Modem firmware version verified"),
            }
        }
        ModemStatus::UnexpectedFirmware => {
            ui.success("Modem firmware accessible");
            ui.warning("Unexpected modem firmware version");
        }
        ModemStatus::Inaccessible { exit_code, stderr } => {
            ui.error("Cannot access modem firmware");
            if let Some(code) = exit_code {
                ui.detail(&format!("exit code: {}", code));
            }
            if !stderr.is_empty() {
                ui.detail(stderr);
            }
        }
        ModemStatus::ToolNotFound { tool } => ui.error(&format!("{} not found", tool)),
    }

    status.passed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    const READ_LINE: &str = "nrfjprog --com --memrd 0x00 0x100";

    #[test]
    fn marker_in_dump_is_verified() {
        let runner = MockRunner::new().with_success(
            READ_LINE,
            "0x00000000: 6D66775F  mfw_nrf9160_1.3.5 ....\n",
        );

        let status = evaluate_modem(&runner, &ProgrammerConfig::default());
        assert_eq!(
            status,
            ModemStatus::Verified {
                firmware_version: Some("mfw_nrf9160_1.3.5".into())
            }
        );
        assert_eq!(runner.invocations(), [READ_LINE]);
    }

    #[test]
    fn dump_without_marker_is_unexpected_but_passes() {
        let runner = MockRunner::new().with_success("nrfjprog", "0x00000000: FFFFFFFF\n");
        let mut ui = MockUI::new();

        assert!(check_modem(&runner, &ProgrammerConfig::default(), &mut ui));
        assert!(ui.has_success("Modem firmware accessible"));
        assert!(ui.has_warning("Unexpected modem firmware version"));
    }

    #[test]
    fn nonzero_exit_is_inaccessible() {
        let runner = MockRunner::new().with_failure("nrfjprog", 33, "ERROR: No debugger found");
        let mut ui = MockUI::with_mode(crate::ui::OutputMode::Verbose);

        assert!(!check_modem(&runner, &ProgrammerConfig::default(), &mut ui));
        assert!(ui.has_error("Cannot access modem firmware"));
        assert!(ui.has_detail("No debugger found"));
    }

    #[test]
    fn missing_tool_is_reported_separately() {
        let runner = MockRunner::new();
        let mut ui = MockUI::new();

        assert!(!check_modem(&runner, &ProgrammerConfig::default(), &mut ui));
        assert!(ui.has_error("nrfjprog not found"));
        assert!(!ui.has_error("Cannot access"));
    }

    #[test]
    fn verified_reports_version() {
        let runner = MockRunner::new().with_success("nrfjprog", "mfw_nrf9160_1.3.5\n");
        let mut ui = MockUI::new();

        assert!(check_modem(&runner, &ProgrammerConfig::default(), &mut ui));
        assert!(ui.has_success("Modem firmware version verified: mfw_nrf9160_1.3.5"));
        assert_eq!(ui.spinners(), ["Reading modem firmware..."]);
    }

    #[test]
    fn firmware_version_requires_full_triple() {
        assert_eq!(firmware_version("mfw_nrf9160_1.3", "mfw_nrf9160"), None);
        assert_eq!(
            firmware_version("x mfw_nrf9160_2.0.1 y", "mfw_nrf9160"),
            Some("mfw_nrf9160_2.0.1".to_string())
        );
    }
}
