//! Page-rendering engine boundary.
//!
//! A [`PageView`] is one navigable page. Views never call back into the
//! session directly: they push [`PageSignal`]s into a [`SignalSink`], and the
//! control thread later feeds them to
//! [`TabSession::handle_signal`](crate::managers::tab_session::TabSession::handle_signal).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::types::customization::BackgroundScript;
use crate::types::errors::PageViewError;
use crate::types::tab::TabId;

pub mod headless;
pub mod history;

/// Lifecycle events a page view reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The view's address changed (navigation committed or redirected).
    AddressChanged(String),
    /// The current document finished loading.
    LoadFinished,
    /// The document title changed.
    TitleChanged(String),
}

/// A [`PageEvent`] tagged with the tab whose view produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSignal {
    pub tab: TabId,
    pub event: PageEvent,
}

impl PageSignal {
    pub fn address_changed(tab: TabId, address: impl Into<String>) -> Self {
        Self {
            tab,
            event: PageEvent::AddressChanged(address.into()),
        }
    }

    pub fn load_finished(tab: TabId) -> Self {
        Self {
            tab,
            event: PageEvent::LoadFinished,
        }
    }

    pub fn title_changed(tab: TabId, title: impl Into<String>) -> Self {
        Self {
            tab,
            event: PageEvent::TitleChanged(title.into()),
        }
    }
}

/// Where page views deliver their signals. Implementations must be callable
/// from whatever context the engine runs its callbacks on.
pub trait SignalSink: Send + Sync {
    fn emit(&self, signal: PageSignal);
}

/// Capability contract for one page-rendering engine instance.
///
/// All operations are fire-and-forget: results arrive later as signals.
pub trait PageView {
    fn load(&mut self, address: &str);
    fn current_address(&self) -> String;
    fn reload(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    /// Run a script against the loaded document. Script failures stay inside
    /// the page.
    fn run_script(&mut self, script: &BackgroundScript);
    /// Called whenever this view becomes or stops being the active tab's view.
    fn set_active(&mut self, _active: bool) {}
}

/// Creates page views for new tabs.
pub trait PageViewFactory {
    type View: PageView;

    fn create(&mut self, tab: TabId, address: &str) -> Result<Self::View, PageViewError>;
}

/// In-memory signal queue drained by the control thread.
#[derive(Debug, Clone, Default)]
pub struct SignalQueue {
    inner: Arc<Mutex<VecDeque<PageSignal>>>,
}

impl SignalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic elsewhere while holding the lock leaves the queue itself intact.
    fn lock(&self) -> MutexGuard<'_, VecDeque<PageSignal>> {
        match self.inner.lock() {
            Ok(queue) => queue,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Take every pending signal, oldest first.
    pub fn drain(&self) -> Vec<PageSignal> {
        self.lock().drain(..).collect()
    }

    /// Take every pending signal produced by one tab, leaving the rest queued.
    pub fn drain_tab(&self, tab: TabId) -> Vec<PageSignal> {
        let mut queue = self.lock();
        let (taken, kept): (VecDeque<_>, VecDeque<_>) =
            queue.drain(..).partition(|s| s.tab == tab);
        *queue = kept;
        taken.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SignalSink for SignalQueue {
    fn emit(&self, signal: PageSignal) {
        self.lock().push_back(signal);
    }
}
