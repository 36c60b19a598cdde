//! # client
//!
//! Leptos + WASM frontend for the Abroad Advise directory site.
//!
//! This crate owns the browser-side session mechanism: the persisted token
//! store, the declarative route-authorization table and its guard, the
//! per-role login flows, logout, and the role-aware navigation shell. The
//! REST backend that issues tokens is an external collaborator reached
//! through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
