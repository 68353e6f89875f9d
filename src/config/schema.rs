//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.nrf-verify.yml` file format. Every section is optional; an omitted
//! section falls back to the built-in tables in [`defaults`](super::defaults).

use serde::{Deserialize, Serialize};

use super::defaults;

/// Root configuration structure for `.nrf-verify.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Environment variables and SDK layout
    pub environment: EnvironmentConfig,

    /// Libraries that must be present in the SDK
    pub libraries: Vec<LibraryRequirement>,

    /// Build tools checked with a version flag
    pub dependencies: Vec<DependencyRequirement>,

    /// Project files and their required directives
    pub project_files: Vec<ProjectFileRequirement>,

    /// Hardware programmer invocation
    pub programmer: ProgrammerConfig,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            environment: EnvironmentConfig::default(),
            libraries: defaults::REQUIRED_LIBRARIES
                .iter()
                .map(|(name, version)| LibraryRequirement {
                    name: name.to_string(),
                    version: version.to_string(),
                })
                .collect(),
            dependencies: defaults::BUILD_DEPENDENCIES
                .iter()
                .map(|(name, args)| DependencyRequirement {
                    name: name.to_string(),
                    args: to_strings(args),
                })
                .collect(),
            project_files: defaults::PROJECT_FILES
                .iter()
                .map(|(file, required)| ProjectFileRequirement {
                    file: file.to_string(),
                    required: to_strings(required),
                })
                .collect(),
            programmer: ProgrammerConfig::default(),
        }
    }
}

/// Environment variables read at startup and the SDK location derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Variable holding the Zephyr base path
    pub sdk_var: String,

    /// Variable holding the toolchain path
    pub toolchain_var: String,

    /// SDK directory name, resolved as a sibling of the Zephyr base
    pub sdk_subdir: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            sdk_var: defaults::SDK_ENV_VAR.to_string(),
            toolchain_var: defaults::TOOLCHAIN_ENV_VAR.to_string(),
            sdk_subdir: defaults::SDK_SUBDIR.to_string(),
        }
    }
}

/// A library under `<sdk>/lib` and the version its `CMakeLists.txt` must declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRequirement {
    pub name: String,
    pub version: String,
}

/// A build tool and the arguments that make it print its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRequirement {
    pub name: String,

    #[serde(default = "default_version_args")]
    pub args: Vec<String>,
}

/// A project file and the substrings it must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFileRequirement {
    pub file: String,

    #[serde(default)]
    pub required: Vec<String>,
}

/// How the hardware programmer is invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgrammerConfig {
    /// Programmer executable name or path
    pub tool: String,

    /// Arguments used to read the modem firmware region
    pub read_args: Vec<String>,

    /// Substring expected in the read output
    pub firmware_marker: String,

    /// Arguments used to program an image; `${image}` is replaced by its path
    pub program_args: Vec<String>,
}

impl Default for ProgrammerConfig {
    fn default() -> Self {
        Self {
            tool: defaults::PROGRAMMER_TOOL.to_string(),
            read_args: to_strings(defaults::MODEM_READ_ARGS),
            firmware_marker: defaults::FIRMWARE_MARKER.to_string(),
            program_args: to_strings(defaults::PROGRAM_ARGS),
        }
    }
}

impl ProgrammerConfig {
    /// Program arguments with the image placeholder substituted.
    pub fn program_args_for(&self, image: &str) -> Vec<String> {
        self.program_args
            .iter()
            .map(|arg| arg.replace(defaults::IMAGE_PLACEHOLDER, image))
            .collect()
    }
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_builtin_tables() {
        let config = VerifyConfig::default();

        assert_eq!(config.libraries.len(), 6);
        assert_eq!(config.libraries[0].name, "nrf_modem_lib");
        assert!(config.libraries.iter().all(|l| l.version == "2.4.0"));

        let tools: Vec<_> = config.dependencies.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(tools, ["cmake", "ninja", "dtc", "gperf", "python3"]);

        let files: Vec<_> = config.project_files.iter().map(|p| p.file.as_str()).collect();
        assert_eq!(files, ["prj.conf", "CMakeLists.txt", "west.yml"]);

        assert_eq!(config.environment.sdk_var, "ZEPHYR_BASE");
        assert_eq!(config.environment.toolchain_var, "GNUARMEMB_TOOLCHAIN_PATH");
        assert_eq!(config.programmer.tool, "nrfjprog");
    }

    #[test]
    fn program_args_substitute_image() {
        let programmer = ProgrammerConfig::default();
        assert_eq!(
            programmer.program_args_for("/tmp/mfw.hex"),
            ["--program", "/tmp/mfw.hex", "--sectorerase"]
        );
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = r#"
libraries:
  - name: nrf_modem_lib
    version: 2.5.0
"#;
        let config: VerifyConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.libraries.len(), 1);
        assert_eq!(config.libraries[0].version, "2.5.0");
        assert_eq!(config.dependencies.len(), 5);
        assert_eq!(config.programmer, ProgrammerConfig::default());
    }

    #[test]
    fn dependency_args_default_to_version_flag() {
        let yaml = r#"
dependencies:
  - name: west
"#;
        let config: VerifyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.dependencies[0].args, ["--version"]);
    }

    #[test]
    fn programmer_section_overrides_single_field() {
        let yaml = r#"
programmer:
  firmware_marker: mfw_nrf91x1
"#;
        let config: VerifyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.programmer.firmware_marker, "mfw_nrf91x1");
        assert_eq!(config.programmer.tool, "nrfjprog");
    }
}
