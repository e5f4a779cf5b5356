// Spectra Settings Engine
// Loads the shell configuration (home address, customization host, window geometry).
// Settings are read from a JSON file at the platform-specific config path and never written back.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::ShellSettings;

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "SPECTRA_CONFIG";

/// Read-only settings loader.
pub struct SettingsEngine {
    config_path: PathBuf,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise `$SPECTRA_CONFIG` if set, then the platform config directory
    /// with `settings.json`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let config_path = path_override
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| platform::get_config_dir().join("settings.json"));
        Self { config_path }
    }

    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults; a malformed one is an error. Fields
    /// absent from the file keep their defaults.
    pub fn load(&self) -> Result<ShellSettings, SettingsError> {
        let path = self.config_path.as_path();

        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ShellSettings::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("Failed to read config file: {}", e)))?;

        let settings: ShellSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::Serialization(format!("Failed to parse config file: {}", e))
        })?;

        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Returns the path to the config file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
