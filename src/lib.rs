//! Spectra: a tabbed browser shell with per-site background customization.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod demo;
pub mod engine;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
