//! App Core for Spectra.
//!
//! Ties the loaded shell settings to one tab session per window.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::engine::{PageSignal, PageViewFactory};
use crate::managers::tab_session::TabSession;
use crate::services::settings_engine::SettingsEngine;
use crate::types::errors::TabError;
use crate::types::settings::ShellSettings;

/// One browser window's state: its settings and its tab session.
pub struct App<F: PageViewFactory> {
    pub session: TabSession<F>,
}

impl<F: PageViewFactory> App<F> {
    /// Creates an App with the given settings, opening the first tab.
    pub fn new(factory: F, settings: ShellSettings) -> Result<Self, TabError> {
        let session = TabSession::new(factory, settings)?;
        Ok(Self { session })
    }

    /// Creates an App from the settings file, falling back to defaults when
    /// the file is unreadable.
    pub fn from_config(
        factory: F,
        config_path: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let engine = SettingsEngine::new(config_path);
        let settings = engine.load().unwrap_or_else(|e| {
            warn!(path = %engine.config_path().display(), "settings load failed, using defaults: {e}");
            ShellSettings::default()
        });
        info!(home = %settings.home_url, host = %settings.customization_host, "starting session");
        Ok(Self::new(factory, settings)?)
    }

    pub fn settings(&self) -> &ShellSettings {
        self.session.settings()
    }

    /// Deliver queued page signals in order. Returns how many were applied.
    pub fn pump<I>(&mut self, signals: I) -> usize
    where
        I: IntoIterator<Item = PageSignal>,
    {
        let mut count = 0;
        for signal in signals {
            self.session.handle_signal(signal);
            count += 1;
        }
        count
    }
}
