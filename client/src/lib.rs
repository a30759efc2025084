//! # museum-client
//!
//! Leptos frontend for the virtual museum: public room and artwork browsing
//! in French, English and Wolof, plus the authenticated back-office.
//!
//! The crate is compiled twice: with `ssr` for the server-side render in the
//! root `museum` binary, and with `hydrate` to WASM for the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
