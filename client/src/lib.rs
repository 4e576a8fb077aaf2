//! # client
//!
//! Leptos + WASM front-end for PlagiGuard: account screens, document upload
//! and result views, upload history, and the admin console.
//!
//! All backend traffic goes through the `gateway` crate. This crate supplies
//! the browser side of the gateway seams (`net::browser`) and the pure
//! presentation shaping the pages render (`util`).

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
