//! Outcome types for individual checks.
//!
//! Each checker first evaluates into one of these values and then reports
//! it, so evaluation can be tested without inspecting printed output.

use std::path::PathBuf;

/// Result of checking one SDK library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryStatus {
    /// Build descriptor declares the required version.
    Matched { version: String },

    /// Build descriptor exists but does not declare the required version.
    Mismatch {
        /// Version that was required
        required: String,
        /// First `VERSION x.y.z` declaration found, if any
        found: Option<String>,
    },

    /// Library directory exists but has no build descriptor.
    Undetermined,

    /// Library directory does not exist.
    Missing,
}

impl LibraryStatus {
    /// Whether the library counts as passed.
    pub fn passed(&self) -> bool {
        matches!(self, LibraryStatus::Matched { .. })
    }
}

/// Result of reading the modem firmware region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModemStatus {
    /// Firmware readable and the family marker was found.
    Verified {
        /// Full firmware version, when the dump contains one
        firmware_version: Option<String>,
    },

    /// Firmware readable but the family marker was absent. Still a pass.
    UnexpectedFirmware,

    /// Programmer ran but could not read the device.
    Inaccessible {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Programmer executable is not installed.
    ToolNotFound { tool: String },
}

impl ModemStatus {
    /// Whether the modem check counts as passed.
    pub fn passed(&self) -> bool {
        matches!(
            self,
            ModemStatus::Verified { .. } | ModemStatus::UnexpectedFirmware
        )
    }
}

/// Result of probing one build tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Tool ran successfully.
    Available {
        /// Version extracted from the tool's output
        version: Option<String>,
        /// Location on PATH, when it could be resolved
        path: Option<PathBuf>,
    },

    /// Tool ran but exited non-zero.
    Failed { exit_code: Option<i32> },

    /// Tool is not installed.
    NotFound,
}

impl DependencyStatus {
    /// Whether the tool counts as available.
    pub fn passed(&self) -> bool {
        matches!(self, DependencyStatus::Available { .. })
    }
}

/// Result of checking one project configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFileStatus {
    /// File contains every required directive.
    Complete,

    /// File is missing some required directives.
    MissingContent { missing: Vec<String> },

    /// File exists but could not be read as text.
    Unreadable { message: String },

    /// File does not exist.
    NotFound,
}

impl ProjectFileStatus {
    /// Whether the file counts as passed.
    pub fn passed(&self) -> bool {
        matches!(self, ProjectFileStatus::Complete)
    }
}

/// Result of the optional firmware update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirmwareUpdateStatus {
    /// No image was supplied; nothing to do.
    NotRequested,

    /// Image was programmed.
    Updated {
        /// SHA-256 of the programmed image
        sha256: String,
    },

    /// User declined the confirmation prompt.
    Declined,

    /// Supplied image path is not a readable file.
    ImageNotFound { path: PathBuf },

    /// Image path cannot be passed to the programmer unchanged.
    InvalidPath { path: PathBuf },

    /// Programmer ran and failed.
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Programmer executable is not installed.
    ToolNotFound { tool: String },
}

impl FirmwareUpdateStatus {
    /// Whether the update step counts as passed.
    pub fn passed(&self) -> bool {
        matches!(
            self,
            FirmwareUpdateStatus::NotRequested | FirmwareUpdateStatus::Updated { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_matched_library_passes() {
        assert!(LibraryStatus::Matched {
            version: "2.4.0".into()
        }
        .passed());
        assert!(!LibraryStatus::Mismatch {
            required: "2.4.0".into(),
            found: Some("2.3.0".into())
        }
        .passed());
        assert!(!LibraryStatus::Undetermined.passed());
        assert!(!LibraryStatus::Missing.passed());
    }

    #[test]
    fn unexpected_firmware_still_passes() {
        assert!(ModemStatus::UnexpectedFirmware.passed());
        assert!(ModemStatus::Verified {
            firmware_version: None
        }
        .passed());
        assert!(!ModemStatus::Inaccessible {
            exit_code: Some(33),
            stderr: String::new()
        }
        .passed());
        assert!(!ModemStatus::ToolNotFound {
            tool: "nrfjprog".into()
        }
        .passed());
    }

    #[test]
    fn dependency_status_passed() {
        assert!(DependencyStatus::Available {
            version: None,
            path: None
        }
        .passed());
        assert!(!DependencyStatus::Failed { exit_code: Some(1) }.passed());
        assert!(!DependencyStatus::NotFound.passed());
    }

    #[test]
    fn project_file_status_passed() {
        assert!(ProjectFileStatus::Complete.passed());
        assert!(!ProjectFileStatus::MissingContent {
            missing: vec!["nrfxlib".into()]
        }
        .passed());
        assert!(!ProjectFileStatus::NotFound.passed());
    }

    #[test]
    fn firmware_update_status_passed() {
        assert!(FirmwareUpdateStatus::NotRequested.passed());
        assert!(FirmwareUpdateStatus::Updated {
            sha256: "ab".into()
        }
        .passed());
        assert!(!FirmwareUpdateStatus::Declined.passed());
        assert!(!FirmwareUpdateStatus::InvalidPath {
            path: PathBuf::from("fw.hex")
        }
        .passed());
        assert!(!FirmwareUpdateStatus::Failed {
            exit_code: Some(1),
            stderr: "ERROR".into()
        }
        .passed());
    }
}
