//! # inkwell
//!
//! Leptos + WASM single-page client for the Inkwell blogging API.
//!
//! The crate talks to a remote REST API through `net`, whose client
//! transparently refreshes an expired cookie session once and replays the
//! failed request. `state` holds plain session, editor, form, and paging
//! state; `components` and `pages` render it. Browser-only code sits behind
//! the `csr` feature so everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ApiConfig::from_env();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    log::info!("inkwell starting against {}", config.base_url);
    leptos::mount::mount_to_body(app::App);
}
