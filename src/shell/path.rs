//! PATH lookup for external tools.
//!
//! Used to show where a tool was found. Whether a tool is usable is
//! decided by running it, not by this lookup.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[cfg(unix)]
fn has_exec_bit(candidate: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    candidate
        .metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn has_exec_bit(candidate: &Path) -> bool {
    candidate.is_file()
}

/// Directories listed in a PATH-style value, in search order.
pub fn search_dirs(path_var: Option<&OsStr>) -> Vec<PathBuf> {
    path_var
        .map(|value| std::env::split_paths(value).collect())
        .unwrap_or_default()
}

/// First executable named `tool` in `dirs`.
///
/// On Windows a `<tool>.exe` in the same directory also matches.
pub fn resolve_tool_path(tool: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter().find_map(|dir| {
        let candidate = dir.join(tool);
        if has_exec_bit(&candidate) {
            return Some(candidate);
        }
        let exe = dir.join(format!("{}.exe", tool));
        (cfg!(windows) && exe.is_file()).then_some(exe)
    })
}

/// Resolve a tool on the process `PATH`.
pub fn which(tool: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH");
    resolve_tool_path(tool, &search_dirs(path_var.as_deref()))
}
