//! Page views backed by child `wry::WebView`s.
//!
//! wry reports page-load start/finish and title changes but exposes no
//! session history, so each view keeps a [`NavHistory`] fed from its own
//! page-load callback and drives back/forward through `history.back()` /
//! `history.forward()` in the page.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::{debug, warn};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::engine::history::NavHistory;
use crate::engine::{PageSignal, PageView, PageViewFactory, SignalSink};
use crate::types::customization::BackgroundScript;
use crate::types::errors::PageViewError;
use crate::types::tab::TabId;

use super::webview_app::UserEvent;

/// Forwards page signals onto the tao event loop.
pub struct ProxySink(Mutex<EventLoopProxy<UserEvent>>);

impl ProxySink {
    pub fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self(Mutex::new(proxy))
    }
}

impl SignalSink for ProxySink {
    fn emit(&self, signal: PageSignal) {
        if let Ok(proxy) = self.0.lock() {
            // Fails only once the event loop has exited.
            let _ = proxy.send_event(UserEvent::Signal(signal));
        }
    }
}

/// Region of the window page views occupy, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentArea {
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContentArea {
    pub fn rect(&self) -> wry::Rect {
        wry::Rect {
            position: wry::dpi::LogicalPosition::new(0.0, self.top).into(),
            size: wry::dpi::LogicalSize::new(self.width, (self.height - self.top).max(0.0)).into(),
        }
    }
}

/// Describe a failed child-webview build. On Linux wry can only embed child
/// webviews in an X11 window, so the message says so.
pub fn child_webview_failure(err: impl fmt::Display) -> String {
    if cfg!(target_os = "linux") {
        format!("{err} (child webviews on Linux require an X11 session)")
    } else {
        err.to_string()
    }
}

fn lock_history(history: &Mutex<NavHistory>) -> std::sync::MutexGuard<'_, NavHistory> {
    match history.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub struct WryPageView {
    tab: TabId,
    webview: WebView,
    history: Arc<Mutex<NavHistory>>,
}

impl WryPageView {
    pub fn set_bounds(&self, area: ContentArea) {
        if let Err(e) = self.webview.set_bounds(area.rect()) {
            warn!(tab = %self.tab, "failed to resize page view: {e}");
        }
    }
}

impl PageView for WryPageView {
    fn load(&mut self, address: &str) {
        lock_history(&self.history).visit(address);
        if let Err(e) = self.webview.load_url(address) {
            warn!(tab = %self.tab, address, "load failed: {e}");
        }
    }

    fn current_address(&self) -> String {
        match self.webview.url() {
            Ok(url) if !url.is_empty() => url,
            _ => lock_history(&self.history)
                .current()
                .unwrap_or_default()
                .to_string(),
        }
    }

    fn reload(&mut self) {
        lock_history(&self.history).mark_reload();
        if let Err(e) = self.webview.reload() {
            warn!(tab = %self.tab, "reload failed: {e}");
        }
    }

    fn go_back(&mut self) {
        if lock_history(&self.history).go_back().is_some() {
            if let Err(e) = self.webview.evaluate_script("history.back()") {
                warn!(tab = %self.tab, "back failed: {e}");
            }
        }
    }

    fn go_forward(&mut self) {
        if lock_history(&self.history).go_forward().is_some() {
            if let Err(e) = self.webview.evaluate_script("history.forward()") {
                warn!(tab = %self.tab, "forward failed: {e}");
            }
        }
    }

    fn can_go_back(&self) -> bool {
        lock_history(&self.history).can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        lock_history(&self.history).can_go_forward()
    }

    fn run_script(&mut self, script: &BackgroundScript) {
        if let Err(e) = self.webview.evaluate_script(script.as_str()) {
            warn!(tab = %self.tab, "script dispatch failed: {e}");
        }
    }

    fn set_active(&mut self, active: bool) {
        if let Err(e) = self.webview.set_visible(active) {
            warn!(tab = %self.tab, active, "visibility change failed: {e}");
        }
    }
}

/// Creates a child webview per tab inside the main window.
///
/// `area` is shared with the event loop, which updates it on resize so new
/// views open at the current size.
pub struct WryEngine {
    window: Rc<Window>,
    sink: Arc<ProxySink>,
    area: Rc<Cell<ContentArea>>,
}

impl WryEngine {
    pub fn new(
        window: Rc<Window>,
        proxy: EventLoopProxy<UserEvent>,
        area: Rc<Cell<ContentArea>>,
    ) -> Self {
        Self {
            window,
            sink: Arc::new(ProxySink::new(proxy)),
            area,
        }
    }
}

impl PageViewFactory for WryEngine {
    type View = WryPageView;

    fn create(&mut self, tab: TabId, address: &str) -> Result<WryPageView, PageViewError> {
        let history = Arc::new(Mutex::new(NavHistory::new(address)));

        let load_sink = Arc::clone(&self.sink);
        let load_history = Arc::clone(&history);
        let title_sink = Arc::clone(&self.sink);

        let webview = WebViewBuilder::new()
            .with_url(address)
            .with_bounds(self.area.get().rect())
            .with_visible(false)
            .with_devtools(cfg!(debug_assertions))
            .with_on_page_load_handler(move |event, url| match event {
                PageLoadEvent::Started => {
                    debug!(tab = %tab, url = %url, "page load started");
                    lock_history(&load_history).observe(&url);
                    load_sink.emit(PageSignal::address_changed(tab, url));
                }
                PageLoadEvent::Finished => {
                    debug!(tab = %tab, url = %url, "page load finished");
                    load_sink.emit(PageSignal::load_finished(tab));
                }
            })
            .with_document_title_changed_handler(move |title| {
                title_sink.emit(PageSignal::title_changed(tab, title));
            })
            .build_as_child(&*self.window)
            .map_err(|e| PageViewError::Create(child_webview_failure(e)))?;

        Ok(WryPageView {
            tab,
            webview,
            history,
        })
    }
}
