//! Spectra: a tabbed browser shell with per-site background customization.
//!
//! Entry point: opens the main browser window.
//! When built without the `gui` feature, runs a console demo against the
//! in-memory page engine.

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spectra=info".into()),
        )
        .init();
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    spectra::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    init_logging();
    spectra::demo::run();
}
