//! Requirement tables and their optional YAML overrides.
//!
//! - Built-in tables in [`defaults`]
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use nrf_verify::config::{load_config, VerifyConfig};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config, VerifyConfig::default());
//! ```

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    DependencyRequirement, EnvironmentConfig, LibraryRequirement, ProgrammerConfig,
    ProjectFileRequirement, VerifyConfig,
};
pub use validator::{validate, validate_config, ValidationError};
