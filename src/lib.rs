//! # folio
//!
//! Leptos + WASM client for a personal portfolio dashboard: animated
//! counters, a collapsible sidebar, a persisted light/dark theme, a simulated
//! activity refresh and a profile sub-page.
//!
//! Browser glue is gated behind the `csr` feature. Without it the crate
//! compiles natively so state and math modules can be unit tested.

pub mod app;
pub mod components;
pub mod consts;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point, run once when the module is instantiated on page load.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    log::debug!("mounting folio dashboard");
    leptos::mount::mount_to_body(app::App);
}
