use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ThemeError;

/// The fixed set of shell color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    DefaultLight,
    Dark,
    SoftBlue,
    LightGray,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::DefaultLight,
        Theme::Dark,
        Theme::SoftBlue,
        Theme::LightGray,
    ];

    /// Machine name used over IPC and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Theme::DefaultLight => "default-light",
            Theme::Dark => "dark",
            Theme::SoftBlue => "soft-blue",
            Theme::LightGray => "light-gray",
        }
    }

    /// Label shown in the theme selector.
    pub fn label(self) -> &'static str {
        match self {
            Theme::DefaultLight => "Default (White)",
            Theme::Dark => "Dark (Black)",
            Theme::SoftBlue => "Soft Blue",
            Theme::LightGray => "Light Gray",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the machine name or the selector label.
impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.name() == wanted || t.label() == wanted)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}
