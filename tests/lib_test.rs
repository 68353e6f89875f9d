//! Library integration tests.

use nrf_verify::checks::{FirmwareUpdateStatus, ModemStatus};
use nrf_verify::config::VerifyConfig;
use nrf_verify::runner::{Verifier, VerifyOptions};
use nrf_verify::shell::MockRunner;
use nrf_verify::ui::{MockUI, StatusKind};
use nrf_verify::VerifyError;
use std::env::VarError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = VerifyError::ToolNotFound {
        tool: "nrfjprog".into(),
    };
    assert_eq!(err.to_string(), "nrfjprog not found");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> nrf_verify::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use nrf_verify::cli::Cli;

    let cli = Cli::parse_from(["nrf-verify", "--quiet", "--project", "app"]);
    assert!(cli.command.is_none());
    assert!(cli.verify.quiet);
}

#[test]
fn modem_check_is_usable_without_hardware() {
    let runner = MockRunner::new().with_success("nrfjprog", "mfw_nrf9160_1.3.5");
    let status =
        nrf_verify::checks::evaluate_modem(&runner, &VerifyConfig::default().programmer);
    assert!(matches!(status, ModemStatus::Verified { .. }));
}

#[test]
fn verifier_runs_against_custom_requirements() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("zephyr")).unwrap();
    fs::create_dir_all(root.join("toolchain")).unwrap();
    fs::create_dir_all(root.join("nrf/lib/nrf_modem_lib")).unwrap();
    fs::write(
        root.join("nrf/lib/nrf_modem_lib/CMakeLists.txt"),
        "VERSION 2.5.0",
    )
    .unwrap();
    fs::write(root.join("prj.conf"), "CONFIG_NRF_MODEM_LIB=y\n").unwrap();

    let config: VerifyConfig = serde_yaml::from_str(
        r#"
libraries:
  - name: nrf_modem_lib
    version: 2.5.0
dependencies:
  - name: cmake
project_files:
  - file: prj.conf
    required: [CONFIG_NRF_MODEM_LIB=y]
"#,
    )
    .unwrap();

    let runner = MockRunner::new()
        .with_success("nrfjprog", "0x00: FFFF")
        .with_success("cmake", "cmake version 3.27.4");
    let zephyr = root.join("zephyr").display().to_string();
    let toolchain = root.join("toolchain").display().to_string();
    let env = move |key: &str| match key {
        "ZEPHYR_BASE" => Ok(zephyr.clone()),
        "GNUARMEMB_TOOLCHAIN_PATH" => Ok(toolchain.clone()),
        _ => Err(VarError::NotPresent),
    };
    let mut ui = MockUI::new();

    let report = Verifier::new(&config, &runner)
        .run_with_env(
            &VerifyOptions {
                project_root: root.to_path_buf(),
                ..Default::default()
            },
            env,
            &mut ui,
        )
        .unwrap();

    assert!(report.all_passed());
    assert_eq!(report.firmware_update, FirmwareUpdateStatus::NotRequested);
    assert!(ui.has_warning("Unexpected modem firmware version"));
    assert_eq!(
        runner.invocations(),
        ["nrfjprog --com --memrd 0x00 0x100", "cmake --version"]
    );

    let rows = &ui.summaries()[0].0;
    assert_eq!(rows[0].status, StatusKind::Success);
    assert_eq!(rows[4].status, StatusKind::Skipped);
}
