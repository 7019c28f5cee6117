//! # curio-client
//!
//! Leptos + WASM frontend for the Curio item-management service.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and small form/file utilities. All browser-only behavior lives
//! behind the `hydrate` feature so the crate also compiles for SSR and for
//! headless unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
