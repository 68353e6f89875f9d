//! Aggregate result of a verification run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::checks::FirmwareUpdateStatus;
use crate::error::Result;
use crate::ui::{StatusKind, SummaryRow};

/// Summary labels, in display order.
pub const LABEL_LIBRARIES: &str = "nRF Libraries";
pub const LABEL_MODEM: &str = "Modem Firmware";
pub const LABEL_DEPENDENCIES: &str = "Build Dependencies";
pub const LABEL_PROJECT: &str = "Project Configuration";
pub const LABEL_FIRMWARE_UPDATE: &str = "Firmware Update";

/// The five aggregate flags of a run plus what the JSON report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Resolved nRF Connect SDK directory
    pub sdk_path: PathBuf,
    pub libraries_ok: bool,
    pub modem_ok: bool,
    pub dependencies_ok: bool,
    pub config_ok: bool,
    /// Outcome of the optional firmware update
    pub firmware_update: FirmwareUpdateStatus,
}

impl VerificationReport {
    /// Firmware update flag. True when no update was requested.
    pub fn firmware_ok(&self) -> bool {
        self.firmware_update.passed()
    }

    /// Whether every aggregate flag is true.
    pub fn all_passed(&self) -> bool {
        self.libraries_ok
            && self.modem_ok
            && self.dependencies_ok
            && self.config_ok
            && self.firmware_ok()
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Rows of the summary table.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        let firmware_status = match self.firmware_update {
            FirmwareUpdateStatus::NotRequested => StatusKind::Skipped,
            ref status => StatusKind::from_passed(status.passed()),
        };

        vec![
            row(LABEL_LIBRARIES, StatusKind::from_passed(self.libraries_ok)),
            row(LABEL_MODEM, StatusKind::from_passed(self.modem_ok)),
            row(LABEL_DEPENDENCIES, StatusKind::from_passed(self.dependencies_ok)),
            row(LABEL_PROJECT, StatusKind::from_passed(self.config_ok)),
            row(LABEL_FIRMWARE_UPDATE, firmware_status),
        ]
    }

    /// Render the machine-readable report.
    pub fn to_json(&self, checked_at: DateTime<Utc>) -> Result<String> {
        let report = JsonReport {
            checked_at,
            sdk_path: &self.sdk_path,
            passed: self.all_passed(),
            checks: JsonChecks {
                libraries: self.libraries_ok,
                modem_firmware: self.modem_ok,
                build_dependencies: self.dependencies_ok,
                project_configuration: self.config_ok,
                firmware_update: self.firmware_ok(),
            },
            firmware_update: firmware_update_label(&self.firmware_update),
        };
        Ok(serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?)
    }
}

fn row(label: &str, status: StatusKind) -> SummaryRow {
    SummaryRow {
        label: label.to_string(),
        status,
    }
}

fn firmware_update_label(status: &FirmwareUpdateStatus) -> &'static str {
    match status {
        FirmwareUpdateStatus::NotRequested => "not_requested",
        FirmwareUpdateStatus::Updated { .. } => "updated",
        FirmwareUpdateStatus::Declined => "declined",
        FirmwareUpdateStatus::ImageNotFound { .. } => "image_not_found",
        FirmwareUpdateStatus::InvalidPath { .. } => "invalid_path",
        FirmwareUpdateStatus::Failed { .. } => "failed",
        FirmwareUpdateStatus::ToolNotFound { .. } => "tool_not_found",
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    checked_at: DateTime<Utc>,
    sdk_path: &'a PathBuf,
    passed: bool,
    checks: JsonChecks,
    firmware_update: &'static str,
}

#[derive(Serialize)]
struct JsonChecks {
    libraries: bool,
    modem_firmware: bool,
    build_dependencies: bool,
    project_configuration: bool,
    firmware_update: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_report() -> VerificationReport {
        VerificationReport {
            sdk_path: PathBuf::from("/opt/ncs/nrf"),
            libraries_ok: true,
            modem_ok: true,
            dependencies_ok: true,
            config_ok: true,
            firmware_update: FirmwareUpdateStatus::NotRequested,
        }
    }

    #[test]
    fn all_flags_true_exits_zero() {
        let report = passing_report();
        assert!(report.all_passed());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn any_false_flag_exits_one() {
        let mut report = passing_report();
        report.modem_ok = false;
        assert_eq!(report.exit_code(), 1);

        let mut report = passing_report();
        report.firmware_update = FirmwareUpdateStatus::Declined;
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn summary_rows_in_order() {
        let mut report = passing_report();
        report.config_ok = false;
        let rows = report.summary_rows();

        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "nRF Libraries",
                "Modem Firmware",
                "Build Dependencies",
                "Project Configuration",
                "Firmware Update"
            ]
        );
        assert_eq!(rows[3].status, StatusKind::Failed);
        assert_eq!(rows[4].status, StatusKind::Skipped);
    }

    #[test]
    fn json_report_contains_flags() {
        let mut report = passing_report();
        report.dependencies_ok = false;

        let json = report.to_json(Utc::now()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["passed"], false);
        assert_eq!(value["checks"]["build_dependencies"], false);
        assert_eq!(value["checks"]["libraries"], true);
        assert_eq!(value["firmware_update"], "not_requested");
        assert_eq!(value["sdk_path"], "/opt/ncs/nrf");
        assert!(value["checked_at"].is_string());
    }
}
