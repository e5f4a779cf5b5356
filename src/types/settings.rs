use serde::{Deserialize, Serialize};

/// Process-wide shell configuration. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    /// Address new tabs open at.
    pub home_url: String,
    /// The only host whose pages receive the background override.
    pub customization_host: String,
    pub new_tab_label: String,
    pub tab_icon: String,
    pub window: WindowSettings,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            customization_host: "www.google.com".to_string(),
            new_tab_label: "New Tab".to_string(),
            tab_icon: "icons/tab.png".to_string(),
            window: WindowSettings::default(),
        }
    }
}

/// Main window geometry and title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Spectra".to_string(),
            width: 1200,
            height: 800,
        }
    }
}
