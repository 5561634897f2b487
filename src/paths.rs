//! XDG-style path utilities for configuration and cache directories.
//!
//! Path resolution prefers the XDG Base Directory Specification over
//! OS-specific locations so behavior is consistent across platforms.

use std::path::PathBuf;

/// Returns the configuration directory for tcheck.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tcheck` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/tcheck` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("tcheck"),
        |xdg| PathBuf::from(xdg).join("tcheck"),
    )
}

/// Returns the cache directory for tcheck.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/tcheck` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/tcheck` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn cache_dir() -> PathBuf {
    std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| home_dir().join(".cache").join("tcheck"),
        |xdg| PathBuf::from(xdg).join("tcheck"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}
