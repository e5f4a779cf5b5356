//! Command handler for the Spectra shell protocol.
//!
//! The toolbar posts one JSON object per command: `{"cmd": "navigate", "url": "..."}`.
//! `handle_message` parses it and `handle_method` dispatches to the tab
//! session. Every successful call answers with the session snapshot so the
//! toolbar can re-render from a single source of truth.

use serde_json::{json, Value};
use tracing::debug;

use crate::app::App;
use crate::engine::PageViewFactory;
use crate::types::customization::{HexColor, ImagePath};
use crate::types::errors::{CustomizationError, TabError};
use crate::types::tab::TabId;

fn snapshot<F: PageViewFactory>(app: &App<F>) -> Result<Value, String> {
    serde_json::to_value(app.session.snapshot()).map_err(|e| e.to_string())
}

fn param_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn param_tab_id(params: &Value) -> Result<TabId, String> {
    let raw = param_str(params, "id")?;
    raw.parse().map_err(|_| format!("invalid tab id: {}", raw))
}

/// Parse a raw IPC body and dispatch it.
pub fn handle_message<F: PageViewFactory>(app: &mut App<F>, body: &str) -> Result<Value, String> {
    let msg: Value = serde_json::from_str(body).map_err(|e| format!("invalid JSON: {}", e))?;
    let cmd = msg
        .get("cmd")
        .and_then(|v| v.as_str())
        .ok_or("missing cmd")?
        .to_string();
    handle_method(app, &cmd, &msg)
}

/// Dispatch a shell command to the tab session.
///
/// Returns the post-command snapshot, or `Err(String)` with an error message.
/// Refusing to close the last tab is not an error: the snapshot carries a
/// `warning` for the shell to show.
pub fn handle_method<F: PageViewFactory>(
    app: &mut App<F>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    debug!(method, "shell command");
    match method {
        "ui_ready" => snapshot(app),

        // ─── Tabs ───
        "new_tab" => {
            let url = params.get("url").and_then(|v| v.as_str());
            app.session.open_tab(url, None).map_err(|e| e.to_string())?;
            snapshot(app)
        }
        "close_tab" => {
            let id = param_tab_id(params)?;
            match app.session.close_tab(id) {
                Ok(()) => snapshot(app),
                Err(TabError::LastTab) => {
                    let mut snap = snapshot(app)?;
                    snap["warning"] = json!(TabError::LastTab.to_string());
                    Ok(snap)
                }
                Err(e) => Err(e.to_string()),
            }
        }
        "switch_tab" => {
            let id = param_tab_id(params)?;
            app.session.activate(id).map_err(|e| e.to_string())?;
            snapshot(app)
        }

        // ─── Navigation ───
        "navigate" => {
            let url = param_str(params, "url")?;
            app.session.navigate_active(url);
            snapshot(app)
        }
        "back" => {
            app.session.back();
            snapshot(app)
        }
        "forward" => {
            app.session.forward();
            snapshot(app)
        }
        "reload" => {
            app.session.reload();
            snapshot(app)
        }

        // ─── Appearance ───
        "set_theme" => {
            let theme = param_str(params, "theme")?;
            app.session.set_theme(theme).map_err(|e| e.to_string())?;
            snapshot(app)
        }
        "set_bg_color" => {
            let color: HexColor = param_str(params, "color")?
                .parse()
                .map_err(|e: CustomizationError| e.to_string())?;
            app.session.set_override_color(color);
            snapshot(app)
        }
        "set_bg_image" => {
            let path = param_str(params, "path")?;
            if path.trim().is_empty() {
                return Err("empty image path".to_string());
            }
            app.session.set_override_image(ImagePath::new(path));
            snapshot(app)
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
