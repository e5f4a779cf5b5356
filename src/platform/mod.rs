// Spectra platform abstraction
// Resolves the per-OS configuration directory the shell settings are read from.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Spectra.
///
/// - **Linux**: `~/.config/spectra` (or `$XDG_CONFIG_HOME/spectra`)
/// - **macOS**: `~/Library/Application Support/Spectra`
/// - **Windows**: `%APPDATA%/Spectra`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
