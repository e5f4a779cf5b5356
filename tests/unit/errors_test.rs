use spectra::types::errors::*;
use spectra::types::tab::TabId;

// === TabError Tests ===

#[test]
fn tab_error_last_tab_display() {
    assert_eq!(TabError::LastTab.to_string(), "Cannot close the last tab.");
}

#[test]
fn tab_error_not_found_display() {
    let id: TabId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
    let err = TabError::NotFound(id);
    assert_eq!(
        err.to_string(),
        "Tab not found: 67e55044-10b1-426f-9247-bb680e5fe0c8"
    );
}

#[test]
fn tab_error_wraps_page_view_error() {
    let err: TabError = PageViewError::Create("no display".to_string()).into();
    assert!(matches!(err, TabError::PageView(_)));
    assert_eq!(err.to_string(), "Failed to create page view: no display");
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::LastTab);
    assert!(err.source().is_none());
}

// === PageViewError Tests ===

#[test]
fn page_view_error_create_display() {
    let err = PageViewError::Create("limit reached".to_string());
    assert_eq!(err.to_string(), "Failed to create page view: limit reached");
}

// === ThemeError Tests ===

#[test]
fn theme_error_unknown_display() {
    let err = ThemeError::Unknown("Neon".to_string());
    assert_eq!(err.to_string(), "Unknown theme: Neon");
}

// === CustomizationError Tests ===

#[test]
fn customization_error_invalid_color_display() {
    let err = CustomizationError::InvalidColor("blue".to_string());
    assert_eq!(err.to_string(), "Invalid color: blue");
}

// === SettingsError Tests ===

#[test]
fn settings_error_io_display() {
    let err = SettingsError::Io("permission denied".to_string());
    assert_eq!(err.to_string(), "Settings I/O error: permission denied");
}

#[test]
fn settings_error_serialization_display() {
    let err = SettingsError::Serialization("expected value".to_string());
    assert_eq!(
        err.to_string(),
        "Settings serialization error: expected value"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SettingsError::Io("x".to_string()));
    assert!(err.source().is_none());
}
