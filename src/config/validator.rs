//! Configuration validation rules.
//!
//! - Library names and versions must be non-empty and names unique
//! - Dependency and project file names must be non-empty
//! - The programmer tool must be named and its program arguments must
//!   reference the image placeholder

use std::collections::HashSet;

use crate::config::defaults::IMAGE_PLACEHOLDER;
use crate::config::schema::VerifyConfig;
use crate::error::{Result, VerifyError};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &VerifyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let env = &config.environment;
    if env.sdk_var.trim().is_empty() || env.toolchain_var.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-env-var",
            "Environment variable names must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for lib in &config.libraries {
        if lib.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-library",
                "Library entries must have a name".to_string(),
            ));
            continue;
        }
        if lib.version.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-version",
                format!("Library '{}' has no version", lib.name),
            ));
        }
        if !seen.insert(lib.name.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-library",
                format!("Library '{}' is listed more than once", lib.name),
            ));
        }
    }

    for dep in &config.dependencies {
        if dep.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-dependency",
                "Dependency entries must have a name".to_string(),
            ));
        }
    }

    for file in &config.project_files {
        if file.file.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-project-file",
                "Project file entries must have a file name".to_string(),
            ));
        }
    }

    let programmer = &config.programmer;
    if programmer.tool.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-programmer",
            "Programmer tool must not be empty".to_string(),
        ));
    }
    if !programmer
        .program_args
        .iter()
        .any(|arg| arg.contains(IMAGE_PLACEHOLDER))
    {
        errors.push(ValidationError::new(
            "missing-image-placeholder",
            format!("Programmer program_args must contain {}", IMAGE_PLACEHOLDER),
        ));
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &VerifyConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(VerifyError::ConfigValidationError { message })
}
