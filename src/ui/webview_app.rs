//! Windowed shell using `wry` + `tao`.
//!
//! Architecture:
//! - One child webview at the top of the window renders the toolbar (address
//!   bar, navigation buttons, theme selector, customize menu, tab strip).
//! - Every tab owns another child webview below it; only the active tab's
//!   view is visible.
//! - Toolbar → Rust over `window.ipc.postMessage()`, page signals → Rust over
//!   the event-loop proxy. Both are handled on the event-loop thread, which
//!   owns the tab session.
//! - Rust → toolbar by evaluating `__spectra_render(snapshot)` after every
//!   command and signal.

use std::cell::Cell;
use std::rc::Rc;

use serde_json::{json, Value};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::{Window, WindowBuilder};
use tracing::{error, info, warn};
use wry::{WebView, WebViewBuilder};

use crate::app::App;
use crate::engine::PageSignal;
use crate::rpc_handler::{handle_message, handle_method};
use crate::services::theme_engine;
use crate::types::theme::Theme;

use super::wry_page_view::{child_webview_failure, ContentArea, WryEngine};

/// Height of the toolbar (navigation row plus tab strip), in logical pixels.
const TOOLBAR_HEIGHT: f64 = 80.0;

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");
const TOOLBAR_CSS: &str = include_str!("../../resources/ui/toolbar.css");

#[derive(Debug)]
pub enum UserEvent {
    /// A page view reported a lifecycle event.
    Signal(PageSignal),
    /// The toolbar posted a command.
    Ipc(String),
}

fn toolbar_html(theme: Theme) -> String {
    let options: String = Theme::ALL
        .iter()
        .map(|t| format!("<option value=\"{}\">{}</option>", t.name(), t.label()))
        .collect();
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\">\
<style id=\"theme-style\">{theme_css}</style><style>{TOOLBAR_CSS}</style></head><body>\
<div class=\"nav\">\
<button id=\"back\" title=\"Back\">&#8592;</button>\
<button id=\"forward\" title=\"Forward\">&#8594;</button>\
<button id=\"reload\" title=\"Reload\">&#8635;</button>\
<input id=\"address\" class=\"address\" type=\"text\" placeholder=\"Enter URL\" />\
<button id=\"new-tab\" title=\"New Tab\">+</button>\
<select id=\"theme\">{options}</select>\
<div class=\"customize\"><button id=\"customize\">Customize</button>\
<div id=\"customize-menu\" class=\"customize-menu\">\
<label>Set Google BG Color <input id=\"bg-color\" type=\"color\" /></label>\
<button id=\"bg-image\">Set Google BG Image</button>\
</div></div>\
</div>\
<div id=\"tabs\" class=\"tabs\"></div>\
<script>{TOOLBAR_JS}</script></body></html>",
        theme_css = theme_engine::stylesheet(theme),
    )
}

fn content_area(window: &Window) -> ContentArea {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    ContentArea {
        top: TOOLBAR_HEIGHT,
        width: size.width,
        height: size.height,
    }
}

fn toolbar_rect(area: ContentArea) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::LogicalPosition::new(0.0, 0.0).into(),
        size: wry::dpi::LogicalSize::new(area.width, TOOLBAR_HEIGHT).into(),
    }
}

fn render_script(state: &Value, theme: Theme) -> String {
    let payload = json!({ "state": state, "css": theme_engine::stylesheet(theme) });
    format!("window.__spectra_render({})", payload)
}

fn error_script(message: &str) -> String {
    format!("window.__spectra_error({})", json!(message))
}

fn push_state(toolbar: &WebView, state: Value, theme: Theme) {
    if let Err(e) = toolbar.evaluate_script(&render_script(&state, theme)) {
        warn!("failed to update toolbar: {e}");
    }
}

fn push_error(toolbar: &WebView, message: &str) {
    if let Err(e) = toolbar.evaluate_script(&error_script(message)) {
        warn!("failed to report error to toolbar: {e}");
    }
}

fn is_pick_image(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("cmd").and_then(|c| c.as_str()).map(|c| c == "pick_bg_image"))
        .unwrap_or(false)
}

fn pick_background_image() -> Option<String> {
    rfd::FileDialog::new()
        .set_title("Select Background Image")
        .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
        .pick_file()
        .map(|p| p.to_string_lossy().into_owned())
}

// ─── Main entry point ───

pub fn run() {
    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = match WindowBuilder::new()
        .with_title("Spectra")
        .with_visible(false)
        .build(&event_loop)
    {
        Ok(window) => Rc::new(window),
        Err(e) => {
            error!("failed to create window: {e}");
            return;
        }
    };

    let area = Rc::new(Cell::new(content_area(&window)));
    let engine = WryEngine::new(Rc::clone(&window), proxy.clone(), Rc::clone(&area));
    let mut app = match App::from_config(engine, None) {
        Ok(app) => app,
        Err(e) => {
            error!("failed to open the first tab: {e}");
            return;
        }
    };

    let geometry = app.settings().window.clone();
    window.set_title(&geometry.title);
    window.set_inner_size(tao::dpi::LogicalSize::new(
        f64::from(geometry.width),
        f64::from(geometry.height),
    ));
    area.set(content_area(&window));
    for view in app.session.views_mut() {
        view.set_bounds(area.get());
    }

    let ipc_proxy = proxy.clone();
    let toolbar = match WebViewBuilder::new()
        .with_html(toolbar_html(app.session.theme()))
        .with_bounds(toolbar_rect(area.get()))
        .with_devtools(cfg!(debug_assertions))
        .with_ipc_handler(move |request: wry::http::Request<String>| {
            let _ = ipc_proxy.send_event(UserEvent::Ipc(request.body().clone()));
        })
        .build_as_child(&*window)
    {
        Ok(toolbar) => toolbar,
        Err(e) => {
            error!("failed to create toolbar: {}", child_webview_failure(e));
            return;
        }
    };
    window.set_visible(true);

    info!("Spectra v{} window ready", env!("CARGO_PKG_VERSION"));

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(tabs = app.session.tab_count(), "window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                let current = content_area(&window);
                area.set(current);
                if let Err(e) = toolbar.set_bounds(toolbar_rect(current)) {
                    warn!("failed to resize toolbar: {e}");
                }
                for view in app.session.views_mut() {
                    view.set_bounds(current);
                }
            }

            Event::UserEvent(UserEvent::Signal(signal)) => {
                app.session.handle_signal(signal);
                match serde_json::to_value(app.session.snapshot()) {
                    Ok(state) => push_state(&toolbar, state, app.session.theme()),
                    Err(e) => warn!("failed to serialize snapshot: {e}"),
                }
            }

            Event::UserEvent(UserEvent::Ipc(body)) => {
                let result = if is_pick_image(&body) {
                    match pick_background_image() {
                        Some(path) => handle_method(&mut app, "set_bg_image", &json!({ "path": path })),
                        None => handle_method(&mut app, "ui_ready", &json!({})),
                    }
                } else {
                    handle_message(&mut app, &body)
                };
                match result {
                    Ok(state) => push_state(&toolbar, state, app.session.theme()),
                    Err(e) => {
                        warn!(body = %body, "shell command failed: {e}");
                        push_error(&toolbar, &e);
                    }
                }
            }

            _ => {}
        }
    });
}
