// Spectra platform paths for Linux
// Config: ~/.config/spectra

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Spectra on Linux.
/// Uses `$XDG_CONFIG_HOME/spectra` if set, otherwise `~/.config/spectra`.
pub fn get_config_dir() -> PathBuf {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}

fn config_dir_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_config_home.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join("spectra"),
        None => {
            let home = home.unwrap_or_else(|| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("spectra")
        }
    }
}
