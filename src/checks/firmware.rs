//! Optional modem firmware update.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::config::ProgrammerConfig;
use crate::error::VerifyError;
use crate::shell::{format_command, ToolRunner};
use crate::ui::{Prompt, UserInterface};

use super::status::FirmwareUpdateStatus;

/// Prompt key for the erase/program confirmation.
pub const FLASH_PROMPT_KEY: &str = "flash_firmware";

/// Hex-encoded SHA-256 of a firmware image.
pub fn image_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Program `image` onto the modem.
///
/// With no image this prints a skip notice and succeeds without invoking
/// the programmer. The image must be a readable file before the programmer
/// is started and its path must be UTF-8. Unless `assume_yes` is set the
/// erase is confirmed through the UI: a terminal asks the user, otherwise
/// the `NRF_VERIFY_PROMPT_FLASH_FIRMWARE` override or a default of yes applies.
pub fn update_firmware(
    runner: &dyn ToolRunner,
    programmer: &ProgrammerConfig,
    image: Option<&Path>,
    assume_yes: bool,
    ui: &mut dyn UserInterface,
) -> FirmwareUpdateStatus {
    let Some(image) = image else {
        ui.message("No firmware path provided, skipping update");
        return FirmwareUpdateStatus::NotRequested;
    };

    ui.show_section("Updating modem firmware:");

    let Some(image_arg) = image.to_str() else {
        ui.error(&format!(
            "Firmware image path is not valid UTF-8: {}",
            image.display()
        ));
        return FirmwareUpdateStatus::InvalidPath {
            path: image.to_path_buf(),
        };
    };

    let bytes = match fs::read(image) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", image.display(), e);
            ui.error(&format!("Firmware image not found: {}", image.display()));
            return FirmwareUpdateStatus::ImageNotFound {
                path: image.to_path_buf(),
            };
        }
    };

    let sha256 = image_digest(&bytes);
    ui.detail(&format!("image: {}", image.display()));
    ui.detail(&format!("sha256: {}", sha256));
    tracing::debug!("Firmware image {} sha256 {}", image.display(), sha256);

    if !assume_yes {
        // A terminal defaults to No. Without one the update proceeds unless overridden.
        let prompt = Prompt {
            key: FLASH_PROMPT_KEY.to_string(),
            question: format!("Erase the modem and program {}?", image.display()),
            default: !ui.is_interactive(),
        };
        match ui.confirm(&prompt) {
            Ok(true) => {}
            Ok(false) => {
                ui.warning("Firmware update skipped");
                return FirmwareUpdateStatus::Declined;
            }
            Err(e) => {
                ui.warning(&format!("Firmware update skipped: {}", e));
                return FirmwareUpdateStatus::Declined;
            }
        }
    }

    let args = programmer.program_args_for(image_arg);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    tracing::debug!("Programming: {}", format_command(&programmer.tool, &args));

    let mut spinner = ui.start_spinner("Programming modem firmware...");
    let outcome = runner.run(&programmer.tool, &args);
    spinner.finish();

    let status = match outcome {
        Ok(result) if result.success => FirmwareUpdateStatus::Updated { sha256 },
        Ok(result) => FirmwareUpdateStatus::Failed {
            exit_code: result.exit_code,
            stderr: result.stderr.trim().to_string(),
        },
        Err(VerifyError::ToolNotFound { tool }) => FirmwareUpdateStatus::ToolNotFound { tool },
        Err(e) => FirmwareUpdateStatus::Failed {
            exit_code: None,
            stderr: e.to_string(),
        },
    };

    match &status {
        FirmwareUpdateStatus::Updated { .. } => ui.success("Modem firmware updated successfully"),
        FirmwareUpdateStatus::Failed { stderr, .. } => {
            ui.error(&format!("Firmware update failed: {}", stderr))
        }
        FirmwareUpdateStatus::ToolNotFound { tool } => ui.error(&format!("{} not found", tool)),
        _ => {}
    }

    status
}
