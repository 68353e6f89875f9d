//! Project configuration file checks.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::ProjectFileRequirement;
use crate::ui::UserInterface;

use super::status::ProjectFileStatus;

/// Evaluate one project file relative to `project_root`.
pub fn evaluate_project_file(
    project_root: &Path,
    requirement: &ProjectFileRequirement,
) -> ProjectFileStatus {
    let path = project_root.join(&requirement.file);

    let content = match fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) if e.kind() == ErrorKind::NotFound => return ProjectFileStatus::NotFound,
        Err(e) => {
            return ProjectFileStatus::Unreadable {
                message: e.to_string(),
            }
        }
    };

    let missing: Vec<String> = requirement
        .required
        .iter()
        .filter(|needle| !content.contains(needle.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() {
        ProjectFileStatus::Complete
    } else {
        tracing::debug!("{} lacks {:?}", path.display(), missing);
        ProjectFileStatus::MissingContent { missing }
    }
}

/// Check every project file and report. Returns the configuration flag.
pub fn check_project_files(
    project_root: &Path,
    files: &[ProjectFileRequirement],
    ui: &mut dyn UserInterface,
) -> bool {
    ui.show_section("Checking project configuration:");

    let mut all_ok = true;
    for requirement in files {
        let status = evaluate_project_file(project_root, requirement);
        let file = &requirement.file;
        match &status {
            ProjectFileStatus::Complete => ui.success(file),
            ProjectFileStatus::MissingContent { missing } => ui.error(&format!(
                "{}: Missing required content: {}",
                file,
                missing.join(", ")
            )),
            ProjectFileStatus::Unreadable { message } => {
                ui.error(&format!("{}: Cannot read file: {}", file, message))
            }
            ProjectFileStatus::NotFound => ui.error(&format!("{} not found", file)),
        }
        all_ok &= status.passed();
    }
    all_ok
}
