//! SDK library version checks.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::LibraryRequirement;
use crate::ui::UserInterface;

use super::status::LibraryStatus;

/// Build descriptor read from each library directory.
pub const BUILD_DESCRIPTOR: &str = "CMakeLists.txt";

static RE_DECLARED_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"VERSION\s+(\d+\.\d+\.\d+)").unwrap());

/// Evaluate one library under `<sdk>/lib/<name>`.
pub fn evaluate_library(sdk_path: &Path, library: &LibraryRequirement) -> LibraryStatus {
    let lib_dir = sdk_path.join("lib").join(&library.name);
    if !lib_dir.exists() {
        tracing::debug!("{} missing at {}", library.name, lib_dir.display());
        return LibraryStatus::Missing;
    }

    let descriptor = lib_dir.join(BUILD_DESCRIPTOR);
    let content = match fs::read(&descriptor) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", descriptor.display(), e);
            return LibraryStatus::Undetermined;
        }
    };

    let marker = format!("VERSION {}", library.version);
    if content.contains(&marker) {
        LibraryStatus::Matched {
            version: library.version.clone(),
        }
    } else {
        LibraryStatus::Mismatch {
            required: library.version.clone(),
            found: declared_version(&content),
        }
    }
}

/// First `VERSION x.y.z` declaration in a build descriptor.
pub fn declared_version(content: &str) -> Option<String> {
    RE_DECLARED_VERSION
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check every library and report each outcome. Returns the aggregate flag.
pub fn check_libraries(
    sdk_path: &Path,
    libraries: &[LibraryRequirement],
    ui: &mut dyn UserInterface,
) -> bool {
    ui.show_section("Checking library versions:");

    let mut all_ok = true;
    for library in libraries {
        let status = evaluate_library(sdk_path, library);
        report_library(&library.name, &status, ui);
        all_ok &= status.passed();
    }
    all_ok
}

fn report_library(name: &str, status: &LibraryStatus, ui: &mut dyn UserInterface) {
    match status {
        LibraryStatus::Matched { version } => ui.success(&format!("{}: {}", name, version)),
        LibraryStatus::Mismatch {
            required,
            found: Some(found),
        } => ui.error(&format!(
            "{}: Version mismatch (required {}, found {})",
            name, required, found
        )),
        LibraryStatus::Mismatch {
            required,
            found: None,
        } => ui.error(&format!("{}: Version mismatch (required {})", name, required)),
        LibraryStatus::Undetermined => ui.warning(&format!("{}: Cannot determine version", name)),
        LibraryStatus::Missing => ui.error(&format!("{}: Not found", name)),
    }
}
