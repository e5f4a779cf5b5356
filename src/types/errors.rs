use thiserror::Error;

use super::tab::TabId;

// === TabError ===

/// Errors related to tab lifecycle operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// The sole remaining tab cannot be closed.
    #[error("Cannot close the last tab.")]
    LastTab,
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(TabId),
    /// The engine could not create a page view for a new tab.
    #[error(transparent)]
    PageView(#[from] PageViewError),
}

// === PageViewError ===

/// Errors reported by the page-rendering engine.
#[derive(Debug, Error)]
pub enum PageViewError {
    /// Failed to create a new page view.
    #[error("Failed to create page view: {0}")]
    Create(String),
}

// === ThemeError ===

/// Errors related to theme selection.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The requested theme is not one of the built-in themes.
    #[error("Unknown theme: {0}")]
    Unknown(String),
}

// === CustomizationError ===

/// Errors related to background customization input.
#[derive(Debug, Error)]
pub enum CustomizationError {
    /// The provided color value is not a hex color.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

// === SettingsError ===

/// Errors related to loading shell settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading settings.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
}
