// Spectra shared type definitions
// Each submodule defines types used across the application.

pub mod customization;
pub mod errors;
pub mod session;
pub mod settings;
pub mod tab;
pub mod theme;
