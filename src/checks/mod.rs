//! Individual verification checks.
//!
//! Each check evaluates into a status value from [`status`] and reports it
//! through the [`UserInterface`](crate::ui::UserInterface). External tools
//! are reached only through [`ToolRunner`](crate::shell::ToolRunner).

pub mod dependencies;
pub mod environment;
pub mod firmware;
pub mod libraries;
pub mod modem;
pub mod project;
pub mod status;

pub use dependencies::{check_dependencies, evaluate_dependency, extract_version};
pub use environment::{
    check_environment, read_environment, read_environment_with, resolve_sdk_path,
    EnvironmentPaths,
};
pub use firmware::{image_digest, update_firmware, FLASH_PROMPT_KEY};
pub use libraries::{check_libraries, declared_version, evaluate_library};
pub use modem::{check_modem, evaluate_modem, firmware_version};
pub use project::{check_project_files, evaluate_project_file};
pub use status::{
    DependencyStatus, FirmwareUpdateStatus, LibraryStatus, ModemStatus, ProjectFileStatus,
};
