//! DruckerForum WebView: a splash screen in front of a single-site browser shell.
//!
//! This library crate exposes all modules for use by the binary and integration tests.
//! The behavioral core is headless; the `gui` feature binds it to `tao` windows and
//! `wry` webviews.

pub mod app;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
