use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CustomizationError;

/// Background color applied when the user has not picked one.
pub const FALLBACK_COLOR: &str = "#ffffff";

/// A CSS hex color, `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(color: &str) -> bool {
        let Some(hex) = color.strip_prefix('#') else {
            return false;
        };
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(FALLBACK_COLOR.to_string())
    }
}

impl FromStr for HexColor {
    type Err = CustomizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !Self::is_valid(trimmed) {
            return Err(CustomizationError::InvalidColor(s.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = CustomizationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Local image file used as a page background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePath(PathBuf);

impl ImagePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The `file://` URL the page loads the image from.
    ///
    /// Relative paths cannot become proper file URLs, so they are passed
    /// through with forward slashes.
    pub fn to_file_url(&self) -> String {
        match url::Url::from_file_path(&self.0) {
            Ok(url) => url.to_string(),
            Err(()) => format!("file://{}", self.0.to_string_lossy().replace('\\', "/")),
        }
    }
}

/// The user's background customization request. Unset fields use fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundOverride {
    pub color: Option<HexColor>,
    pub image: Option<ImagePath>,
}

/// Fully resolved background values for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundStyle {
    pub color: HexColor,
    pub image: Option<ImagePath>,
}

impl BackgroundStyle {
    /// The image as the page sees it; empty when no image is set.
    pub fn image_url(&self) -> String {
        self.image
            .as_ref()
            .map(ImagePath::to_file_url)
            .unwrap_or_default()
    }

    pub fn script(&self) -> BackgroundScript {
        BackgroundScript::render(self)
    }
}

/// Outcome of evaluating the customization policy for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomizationAction {
    NoAction,
    RunScript(BackgroundStyle),
}

/// Script text that applies a [`BackgroundStyle`] to `document.body`.
///
/// Values are embedded as JSON string literals, never spliced in raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundScript(String);

impl BackgroundScript {
    fn render(style: &BackgroundStyle) -> Self {
        let color = js_string(style.color.as_str());
        let image = js_string(&style.image_url());
        Self(format!(
            "(function(){{try{{\
var s=document.body.style;\
s.backgroundColor={color};\
s.backgroundImage=\"url('\"+{image}+\"')\";\
s.backgroundSize='cover';\
s.backgroundRepeat='no-repeat';\
}}catch(error){{console.error('Error applying background:',error);}}}})();"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn js_string(value: &str) -> String {
    // Serializing a &str cannot fail.
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
