// Spectra services
// Stateless helpers the session and shell build on: customization decisions, theme palettes, settings loading.

pub mod customization_policy;
pub mod settings_engine;
pub mod theme_engine;
