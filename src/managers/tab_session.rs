//! Tab session coordinator.
//!
//! Owns the open tabs and which one is active, applies shell commands, and
//! routes page-view signals to state updates. All mutation happens on the
//! control thread; page views report back only through
//! [`TabSession::handle_signal`].

use tracing::{debug, info, warn};

use crate::engine::{PageEvent, PageSignal, PageView, PageViewFactory};
use crate::services::customization_policy;
use crate::types::customization::{
    BackgroundOverride, CustomizationAction, HexColor, ImagePath,
};
use crate::types::errors::{TabError, ThemeError};
use crate::types::session::SessionSnapshot;
use crate::types::settings::ShellSettings;
use crate::types::tab::{label_for_address, Tab, TabId, TabSummary};
use crate::types::theme::Theme;

/// Prefix `http://` unless the input already starts with `http`.
///
/// No validation: malformed input is the page view's to fail on.
pub fn normalize_address(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

pub struct TabSession<F: PageViewFactory> {
    factory: F,
    settings: ShellSettings,
    tabs: Vec<Tab<F::View>>,
    active: TabId,
    theme: Theme,
    background: BackgroundOverride,
    current_address: String,
}

impl<F: PageViewFactory> TabSession<F> {
    /// Start a session with one tab at the home address.
    pub fn new(mut factory: F, settings: ShellSettings) -> Result<Self, TabError> {
        let id = TabId::new();
        let mut view = factory.create(id, &settings.home_url)?;
        view.set_active(true);
        let current_address = view.current_address();
        let first = Tab {
            id,
            view,
            label: settings.new_tab_label.clone(),
            icon: settings.tab_icon.clone(),
        };
        info!(tab = %id, address = %current_address, "session started");
        Ok(Self {
            factory,
            settings,
            tabs: vec![first],
            active: id,
            theme: Theme::default(),
            background: BackgroundOverride::default(),
            current_address,
        })
    }

    fn find_index(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    fn active_index(&self) -> usize {
        // `active` always names a live tab.
        self.find_index(self.active).unwrap_or(0)
    }

    fn switch_to(&mut self, index: usize) {
        if let Some(previous) = self.tabs.iter_mut().find(|t| t.id == self.active) {
            previous.view.set_active(false);
        }
        let tab = &mut self.tabs[index];
        tab.view.set_active(true);
        self.active = tab.id;
        self.current_address = tab.view.current_address();
    }

    // ─── Tab lifecycle ───

    /// Open a tab at `address` (default: home), make it active, return its id.
    pub fn open_tab(&mut self, address: Option<&str>, label: Option<&str>) -> Result<TabId, TabError> {
        let id = TabId::new();
        let address = address.unwrap_or(&self.settings.home_url).to_string();
        let view = self.factory.create(id, &address)?;
        self.tabs.push(Tab {
            id,
            view,
            label: label.unwrap_or(&self.settings.new_tab_label).to_string(),
            icon: self.settings.tab_icon.clone(),
        });
        self.switch_to(self.tabs.len() - 1);
        info!(tab = %id, address = %address, count = self.tabs.len(), "tab opened");
        Ok(id)
    }

    /// Close a tab, releasing its page view. The sole tab cannot be closed.
    ///
    /// If the closed tab was active, the tab that slides into its position
    /// becomes active, or the new last tab when it was last.
    pub fn close_tab(&mut self, id: TabId) -> Result<(), TabError> {
        let index = self.find_index(id).ok_or(TabError::NotFound(id))?;
        if self.tabs.len() == 1 {
            warn!(tab = %id, "refusing to close the last tab");
            return Err(TabError::LastTab);
        }

        let was_active = self.active == id;
        drop(self.tabs.remove(index));

        if was_active {
            let next = index.min(self.tabs.len() - 1);
            self.switch_to(next);
        }
        info!(tab = %id, active = %self.active, count = self.tabs.len(), "tab closed");
        Ok(())
    }

    /// Make `id` the active tab; the address bar follows immediately.
    pub fn activate(&mut self, id: TabId) -> Result<(), TabError> {
        let index = self.find_index(id).ok_or(TabError::NotFound(id))?;
        self.switch_to(index);
        debug!(tab = %id, address = %self.current_address, "tab activated");
        Ok(())
    }

    // ─── Navigation ───

    pub fn navigate_active(&mut self, raw: &str) {
        let address = normalize_address(raw);
        debug!(tab = %self.active, address = %address, "navigate");
        self.active_view_mut().load(&address);
    }

    pub fn back(&mut self) {
        let view = self.active_view_mut();
        if view.can_go_back() {
            view.go_back();
        }
    }

    pub fn forward(&mut self) {
        let view = self.active_view_mut();
        if view.can_go_forward() {
            view.go_forward();
        }
    }

    pub fn reload(&mut self) {
        self.active_view_mut().reload();
    }

    // ─── Signals ───

    /// Apply one page-view signal. Signals for closed tabs are dropped.
    pub fn handle_signal(&mut self, signal: PageSignal) {
        let PageSignal { tab, event } = signal;
        match event {
            PageEvent::AddressChanged(address) => self.on_address_changed(tab, address),
            PageEvent::LoadFinished => {
                self.apply_customization(tab);
            }
            PageEvent::TitleChanged(title) => self.on_title_changed(tab, title),
        }
    }

    fn on_address_changed(&mut self, id: TabId, address: String) {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            debug!(tab = %id, "address change for closed tab discarded");
            return;
        };
        tab.label = label_for_address(&address);
        if id == self.active {
            self.current_address = address;
        } else {
            debug!(tab = %id, address = %address, "background tab navigated");
        }
    }

    fn on_title_changed(&mut self, id: TabId, title: String) {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            debug!(tab = %id, "title change for closed tab discarded");
            return;
        };
        let title = title.trim();
        if !title.is_empty() {
            tab.label = title.to_string();
        }
    }

    /// Evaluate the customization policy for one tab's page and run the
    /// resulting script on that tab's view.
    fn apply_customization(&mut self, id: TabId) -> CustomizationAction {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            debug!(tab = %id, "load finished for closed tab discarded");
            return CustomizationAction::NoAction;
        };
        let action = customization_policy::evaluate(
            &tab.view.current_address(),
            &self.background,
            &self.settings.customization_host,
        );
        if let CustomizationAction::RunScript(style) = &action {
            debug!(tab = %id, color = %style.color, "applying background");
            tab.view.run_script(&style.script());
        }
        action
    }

    // ─── Customization ───

    /// Set the override color and re-apply it to the active tab right away.
    pub fn set_override_color(&mut self, color: HexColor) -> CustomizationAction {
        info!(color = %color, "background color override set");
        self.background.color = Some(color);
        self.apply_customization(self.active)
    }

    /// Set the override image and re-apply it to the active tab right away.
    pub fn set_override_image(&mut self, image: ImagePath) -> CustomizationAction {
        info!(image = %image.as_path().display(), "background image override set");
        self.background.image = Some(image);
        self.apply_customization(self.active)
    }

    pub fn set_theme(&mut self, choice: &str) -> Result<Theme, ThemeError> {
        let theme: Theme = choice.parse()?;
        self.theme = theme;
        info!(theme = %theme, "theme changed");
        Ok(theme)
    }

    // ─── Exposed state ───

    pub fn tab_summaries(&self) -> Vec<TabSummary> {
        self.tabs.iter().map(Tab::summary).collect()
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn current_address(&self) -> &str {
        &self.current_address
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn background_override(&self) -> &BackgroundOverride {
        &self.background
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn view(&self, id: TabId) -> Option<&F::View> {
        self.tabs.iter().find(|t| t.id == id).map(|t| &t.view)
    }

    pub fn active_view(&self) -> &F::View {
        &self.tabs[self.active_index()].view
    }

    fn active_view_mut(&mut self) -> &mut F::View {
        let index = self.active_index();
        &mut self.tabs[index].view
    }

    /// Every view, for shell-level housekeeping such as resizing.
    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut F::View> {
        self.tabs.iter_mut().map(|t| &mut t.view)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let view = self.active_view();
        SessionSnapshot {
            tabs: self.tab_summaries(),
            active_id: self.active,
            current_address: self.current_address.clone(),
            theme: self.theme,
            theme_label: self.theme.label(),
            can_go_back: view.can_go_back(),
            can_go_forward: view.can_go_forward(),
        }
    }
}
