//! # client
//!
//! Leptos + WASM frontend for the code mapping review console.
//!
//! This crate contains the two pages (code-type mappings and term mappings),
//! the edit dialog, view state machines, the detail-route codec, and the REST
//! helpers that call the server's `/api` routes. It is rendered on the server
//! with the `ssr` feature and hydrated in the browser with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
