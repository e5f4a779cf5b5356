//! Unit tests for the shell command handler: every method dispatched by
//! `handle_method`, plus the raw-message path used by the toolbar.

use rstest::rstest;
use serde_json::{json, Value};

use spectra::app::App;
use spectra::engine::headless::HeadlessEngine;
use spectra::engine::SignalQueue;
use spectra::rpc_handler::{handle_message, handle_method};
use spectra::types::settings::ShellSettings;

/// Create a fresh App on the in-memory engine with startup signals applied.
fn setup() -> (App<HeadlessEngine>, SignalQueue) {
    let queue = SignalQueue::new();
    let mut app = App::new(HeadlessEngine::new(queue.clone()), ShellSettings::default())
        .expect("Failed to init App");
    app.pump(queue.drain());
    (app, queue)
}

fn call(app: &mut App<HeadlessEngine>, queue: &SignalQueue, method: &str, params: Value) -> Value {
    let res = handle_method(app, method, &params).unwrap();
    app.pump(queue.drain());
    res
}

fn active_id(state: &Value) -> String {
    state["active_id"].as_str().unwrap().to_string()
}

// ─── Snapshot ───

#[test]
fn test_ui_ready_returns_snapshot() {
    let (mut app, queue) = setup();
    let res = call(&mut app, &queue, "ui_ready", json!({}));
    assert_eq!(res["current_address"], "https://www.google.com");
    assert_eq!(res["tabs"].as_array().unwrap().len(), 1);
    assert_eq!(res["tabs"][0]["label"], "google.com");
    assert_eq!(res["tabs"][0]["icon"], "icons/tab.png");
    assert_eq!(res["theme"], "default-light");
    assert_eq!(res["theme_label"], "Default (White)");
    assert_eq!(res["can_go_back"], false);
    assert_eq!(res["can_go_forward"], false);
    assert!(res.get("warning").is_none());
}

// ─── Tabs ───

#[test]
fn test_new_tab_with_and_without_url() {
    let (mut app, queue) = setup();
    let res = call(&mut app, &queue, "new_tab", json!({ "url": "https://example.com/" }));
    assert_eq!(res["tabs"].as_array().unwrap().len(), 2);
    assert_eq!(res["current_address"], "https://example.com/");

    let res = call(&mut app, &queue, "new_tab", json!({}));
    assert_eq!(res["tabs"].as_array().unwrap().len(), 3);
    assert_eq!(res["current_address"], "https://www.google.com");
}

#[test]
fn test_switch_and_close_tab() {
    let (mut app, queue) = setup();
    let first = active_id(&call(&mut app, &queue, "ui_ready", json!({})));
    let second = active_id(&call(&mut app, &queue, "new_tab", json!({ "url": "https://b.example/" })));

    let res = call(&mut app, &queue, "switch_tab", json!({ "id": first }));
    assert_eq!(active_id(&res), first);
    assert_eq!(res["current_address"], "https://www.google.com");

    let res = call(&mut app, &queue, "close_tab", json!({ "id": first }));
    assert_eq!(active_id(&res), second);
    assert_eq!(res["tabs"].as_array().unwrap().len(), 1);
}

#[test]
fn test_close_last_tab_returns_warning() {
    let (mut app, queue) = setup();
    let only = active_id(&call(&mut app, &queue, "ui_ready", json!({})));
    let res = call(&mut app, &queue, "close_tab", json!({ "id": only }));
    assert_eq!(res["warning"], "Cannot close the last tab.");
    assert_eq!(res["tabs"].as_array().unwrap().len(), 1);
}

#[test]
fn test_tab_id_errors() {
    let (mut app, _queue) = setup();
    assert_eq!(
        handle_method(&mut app, "close_tab", &json!({})).unwrap_err(),
        "missing id"
    );
    assert_eq!(
        handle_method(&mut app, "switch_tab", &json!({ "id": "nope" })).unwrap_err(),
        "invalid tab id: nope"
    );
    let stranger = "67e55044-10b1-426f-9247-bb680e5fe0c8";
    let err = handle_method(&mut app, "switch_tab", &json!({ "id": stranger })).unwrap_err();
    assert_eq!(err, format!("Tab not found: {}", stranger));
}

// ─── Navigation ───

#[test]
fn test_navigate_back_forward_reload() {
    let (mut app, queue) = setup();
    call(&mut app, &queue, "navigate", json!({ "url": "example.com" }));
    let res = call(&mut app, &queue, "ui_ready", json!({}));
    assert_eq!(res["current_address"], "http://example.com");
    assert_eq!(res["can_go_back"], true);

    call(&mut app, &queue, "back", json!({}));
    let res = call(&mut app, &queue, "ui_ready", json!({}));
    assert_eq!(res["current_address"], "https://www.google.com");
    assert_eq!(res["can_go_forward"], true);

    call(&mut app, &queue, "forward", json!({}));
    let res = call(&mut app, &queue, "reload", json!({}));
    assert_eq!(res["current_address"], "http://example.com");
}

#[test]
fn test_navigate_requires_url() {
    let (mut app, _queue) = setup();
    assert_eq!(
        handle_method(&mut app, "navigate", &json!({})).unwrap_err(),
        "missing url"
    );
}

// ─── Appearance ───

#[test]
fn test_set_theme() {
    let (mut app, queue) = setup();
    let res = call(&mut app, &queue, "set_theme", json!({ "theme": "Soft Blue" }));
    assert_eq!(res["theme"], "soft-blue");
    assert_eq!(res["theme_label"], "Soft Blue");

    let err = handle_method(&mut app, "set_theme", &json!({ "theme": "Neon" })).unwrap_err();
    assert_eq!(err, "Unknown theme: Neon");
    assert_eq!(app.session.theme().name(), "soft-blue");
}

#[rstest]
#[case("Default (White)", "default-light")]
#[case("Dark (Black)", "dark")]
#[case("Soft Blue", "soft-blue")]
#[case("Light Gray", "light-gray")]
#[case("light-gray", "light-gray")]
fn test_set_theme_accepts_labels_and_names(#[case] choice: &str, #[case] expected: &str) {
    let (mut app, _queue) = setup();
    let res = handle_method(&mut app, "set_theme", &json!({ "theme": choice })).unwrap();
    assert_eq!(res["theme"], expected);
}

#[test]
fn test_set_bg_color() {
    let (mut app, queue) = setup();
    call(&mut app, &queue, "set_bg_color", json!({ "color": "#000000" }));
    let color = app.session.background_override().color.clone().unwrap();
    assert_eq!(color.as_str(), "#000000");
    let script = app.session.active_view().scripts().last().unwrap().clone();
    assert!(script.as_str().contains("\"#000000\""));

    let err = handle_method(&mut app, "set_bg_color", &json!({ "color": "black" })).unwrap_err();
    assert_eq!(err, "Invalid color: black");
}

#[test]
fn test_set_bg_image() {
    let (mut app, queue) = setup();
    call(&mut app, &queue, "set_bg_image", json!({ "path": "/tmp/bg.png" }));
    let image = app.session.background_override().image.clone().unwrap();
    assert_eq!(image.to_file_url(), "file:///tmp/bg.png");

    assert_eq!(
        handle_method(&mut app, "set_bg_image", &json!({ "path": "  " })).unwrap_err(),
        "empty image path"
    );
}

// ─── Raw messages ───

#[test]
fn test_handle_message_dispatches_cmd() {
    let (mut app, _queue) = setup();
    let res = handle_message(&mut app, r#"{"cmd":"set_theme","theme":"dark"}"#).unwrap();
    assert_eq!(res["theme"], "dark");
}

#[test]
fn test_handle_message_with_hex_color() {
    let (mut app, _queue) = setup();
    handle_message(&mut app, r##"{"cmd":"set_bg_color","color":"#add8e6"}"##).unwrap();
    let color = app.session.background_override().color.clone().unwrap();
    assert_eq!(color.as_str(), "#add8e6");
}

#[test]
fn test_handle_message_errors() {
    let (mut app, _queue) = setup();
    assert!(handle_message(&mut app, "not json")
        .unwrap_err()
        .starts_with("invalid JSON"));
    assert_eq!(handle_message(&mut app, r#"{"url":"x"}"#).unwrap_err(), "missing cmd");
    assert_eq!(
        handle_message(&mut app, r#"{"cmd":"fly"}"#).unwrap_err(),
        "unknown method: fly"
    );
}
