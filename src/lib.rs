//! # shopscope
//!
//! Leptos + WASM storefront browser for a remote product catalog.
//!
//! This crate contains the catalog page, its components, application state
//! (favorites and incremental pagination), the catalog HTTP client, and the
//! browser storage and debounce helpers. Browser-only paths are gated behind
//! the `csr` feature so the state machines can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// mounts [`app::App`] to `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already installed; keeping it");
    }
    leptos::mount::mount_to_body(app::App);
}
