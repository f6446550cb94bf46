//! # facts-explorer
//!
//! Leptos + WASM client for the Historical Facts Explorer. Fetches
//! "on this day in history" facts from the remote facts API and renders
//! them as category sections and fact cards.
//!
//! This crate contains the page, components, application state, the pure
//! render model, and the HTTP gateway. Core logic (state transitions,
//! filtering, fragment planning) is host-agnostic and unit-tested without
//! a browser; `pages` and `components` are the thin adapter layer that
//! mounts it into the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod render;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
