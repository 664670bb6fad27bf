//! XDG Base Directory utilities for locating the global config file.

use crate::config::sources::EnvSnapshot;
use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
/// Follows XDG Base Directory Specification
pub fn config_home(env: &EnvSnapshot) -> Option<PathBuf> {
    if let Some(xdg_config_home) = env.get("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config_home));
    }

    env.get("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
}

/// Path of the global config file: `<config home>/chunkedit/config.toml`
pub fn global_config_path(env: &EnvSnapshot) -> Option<PathBuf> {
    config_home(env).map(|dir| dir.join("chunkedit").join("config.toml"))
}
