//! Build tool availability checks.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::DependencyRequirement;
use crate::error::VerifyError;
use crate::shell::{which, ToolRunner};
use crate::ui::UserInterface;

use super::status::DependencyStatus;

static VERSION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"]
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Run one tool with its version arguments and classify the result.
pub fn evaluate_dependency(
    runner: &dyn ToolRunner,
    dependency: &DependencyRequirement,
) -> DependencyStatus {
    let args: Vec<&str> = dependency.args.iter().map(String::as_str).collect();

    match runner.run(&dependency.name, &args) {
        Ok(result) if result.success => DependencyStatus::Available {
            version: extract_version(&result.combined_output()),
            path: which(&dependency.name),
        },
        Ok(result) => DependencyStatus::Failed {
            exit_code: result.exit_code,
        },
        Err(VerifyError::ToolNotFound { .. }) => DependencyStatus::NotFound,
        Err(e) => {
            tracing::debug!("{} version check failed: {}", dependency.name, e);
            DependencyStatus::Failed { exit_code: None }
        }
    }
}

/// Pull a version number out of a tool's `--version` output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_PATTERNS.iter().find_map(|re| {
        re.captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Check every build tool and report. Returns the dependency flag.
pub fn check_dependencies(
    runner: &dyn ToolRunner,
    dependencies: &[DependencyRequirement],
    ui: &mut dyn UserInterface,
) -> bool {
    ui.show_section("Checking build dependencies:");

    let mut all_ok = true;
    for dependency in dependencies {
        let status = evaluate_dependency(runner, dependency);
        match &status {
            DependencyStatus::Available { version, path } => {
                ui.success(&dependency.name);
                if let Some(version) = version {
                    ui.detail(&format!("version: {}", version));
                }
                if let Some(path) = path {
                    ui.detail(&format!("path: {}", path.display()));
                }
            }
            DependencyStatus::Failed {
                exit_code: Some(code),
            } => ui.error(&format!(
                "{} check failed (exit code {})",
                dependency.name, code
            )),
            DependencyStatus::Failed { exit_code: None } => {
                ui.error(&format!("{} check failed", dependency.name))
            }
            DependencyStatus::NotFound => ui.error(&format!("{} not found", dependency.name)),
        }
        all_ok &= status.passed();
    }
    all_ok
}
