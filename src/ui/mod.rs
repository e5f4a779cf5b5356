//! Spectra windowed shell.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar is HTML/CSS/JS in its own child webview; each tab's page is
//! another child webview. Toolbar commands arrive over wry IPC.

pub mod webview_app;
pub mod wry_page_view;
