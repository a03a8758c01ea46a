//! # site
//!
//! Leptos + WASM single-page portfolio. Server-rendered by the root `folio`
//! binary and hydrated in the browser.
//!
//! This crate contains the page, its section components, the static content,
//! the palette table, and the theme state that drives the colors.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
