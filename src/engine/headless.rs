//! In-memory page engine.
//!
//! Nothing is fetched or rendered. Every navigation commits immediately and
//! queues `AddressChanged` then `LoadFinished` on the sink, so the control
//! thread sees the same signal shapes a real engine produces. Used by the
//! console demo and the test-suite.

use std::sync::Arc;

use tracing::debug;

use super::history::NavHistory;
use super::{PageSignal, PageView, PageViewFactory, SignalSink};
use crate::types::customization::BackgroundScript;
use crate::types::errors::PageViewError;
use crate::types::tab::TabId;

pub struct HeadlessPageView {
    tab: TabId,
    history: NavHistory,
    sink: Arc<dyn SignalSink>,
    scripts: Vec<BackgroundScript>,
    reloads: usize,
    active: bool,
}

impl HeadlessPageView {
    fn new(tab: TabId, address: &str, sink: Arc<dyn SignalSink>) -> Self {
        let mut view = Self {
            tab,
            history: NavHistory::new(address),
            sink,
            scripts: Vec::new(),
            reloads: 0,
            active: false,
        };
        view.history.observe(address);
        view.commit(address);
        view
    }

    fn commit(&self, address: &str) {
        self.sink.emit(PageSignal::address_changed(self.tab, address));
        self.sink.emit(PageSignal::load_finished(self.tab));
    }

    /// Scripts run against this view, oldest first.
    pub fn scripts(&self) -> &[BackgroundScript] {
        &self.scripts
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Simulate an in-page navigation (a link click) the session did not ask for.
    pub fn follow_link(&mut self, address: &str) {
        self.history.observe(address);
        self.commit(address);
    }
}

impl PageView for HeadlessPageView {
    fn load(&mut self, address: &str) {
        debug!(tab = %self.tab, address, "headless load");
        self.history.visit(address);
        self.history.observe(address);
        self.commit(address);
    }

    fn current_address(&self) -> String {
        self.history.current().unwrap_or_default().to_string()
    }

    fn reload(&mut self) {
        self.reloads += 1;
        self.sink.emit(PageSignal::load_finished(self.tab));
    }

    fn go_back(&mut self) {
        if let Some(address) = self.history.go_back().map(str::to_string) {
            self.history.observe(&address);
            self.commit(&address);
        }
    }

    fn go_forward(&mut self) {
        if let Some(address) = self.history.go_forward().map(str::to_string) {
            self.history.observe(&address);
            self.commit(&address);
        }
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn run_script(&mut self, script: &BackgroundScript) {
        self.scripts.push(script.clone());
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Factory for [`HeadlessPageView`]s sharing one signal sink.
pub struct HeadlessEngine {
    sink: Arc<dyn SignalSink>,
    remaining: Option<usize>,
}

impl HeadlessEngine {
    pub fn new(sink: impl SignalSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            remaining: None,
        }
    }

    /// An engine that can create at most `views` page views.
    pub fn with_capacity(sink: impl SignalSink + 'static, views: usize) -> Self {
        Self {
            sink: Arc::new(sink),
            remaining: Some(views),
        }
    }
}

impl PageViewFactory for HeadlessEngine {
    type View = HeadlessPageView;

    fn create(&mut self, tab: TabId, address: &str) -> Result<HeadlessPageView, PageViewError> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return Err(PageViewError::Create("headless view limit reached".to_string()));
            }
            *remaining -= 1;
        }
        Ok(HeadlessPageView::new(tab, address, Arc::clone(&self.sink)))
    }
}
