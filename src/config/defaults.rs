//! Built-in requirement tables.
//!
//! These are the values checked when no configuration file overrides them.

/// Environment variable holding the Zephyr base directory.
pub const SDK_ENV_VAR: &str = "ZEPHYR_BASE";

/// Environment variable holding the GNU Arm Embedded toolchain directory.
pub const TOOLCHAIN_ENV_VAR: &str = "GNUARMEMB_TOOLCHAIN_PATH";

/// Directory name of the nRF Connect SDK, a sibling of `ZEPHYR_BASE`.
pub const SDK_SUBDIR: &str = "nrf";

/// Required nRF libraries and their versions.
pub const REQUIRED_LIBRARIES: &[(&str, &str)] = &[
    ("nrf_modem_lib", "2.4.0"),
    ("at_monitor", "2.4.0"),
    ("at_cmd_parser", "2.4.0"),
    ("lte_link_control", "2.4.0"),
    ("modem_info", "2.4.0"),
    ("modem_key_mgmt", "2.4.0"),
];

/// Build tools and the arguments used to query their version.
pub const BUILD_DEPENDENCIES: &[(&str, &[&str])] = &[
    ("cmake", &["--version"]),
    ("ninja", &["--version"]),
    ("dtc", &["--version"]),
    ("gperf", &["--version"]),
    ("python3", &["--version"]),
];

/// Project files and the directives each must contain.
pub const PROJECT_FILES: &[(&str, &[&str])] = &[
    (
        "prj.conf",
        &["CONFIG_NRF_MODEM_LIB=y", "CONFIG_LTE_LINK_CONTROL=y"],
    ),
    ("CMakeLists.txt", &["nrf_modem_lib", "lte_link_control"]),
    ("west.yml", &["nrf", "nrfxlib"]),
];

/// Hardware programmer executable.
pub const PROGRAMMER_TOOL: &str = "nrfjprog";

/// Arguments that read the modem firmware header region.
pub const MODEM_READ_ARGS: &[&str] = &["--com", "--memrd", "0x00", "0x100"];

/// Marker expected in the memory dump of a supported modem firmware.
pub const FIRMWARE_MARKER: &str = "mfw_nrf9160";

/// Placeholder replaced by the firmware image path in [`PROGRAM_ARGS`].
pub const IMAGE_PLACEHOLDER: &str = "${image}";

/// Arguments that erase and program a firmware image.
pub const PROGRAM_ARGS: &[&str] = &["--program", IMAGE_PLACEHOLDER, "--sectorerase"];
