//! # client
//!
//! Leptos + WASM frontend for the MedMatch healthcare-jobs marketplace.
//!
//! This crate contains pages, components, session state, the REST wrapper
//! for the marketplace backend, and the client half of the
//! route-authorization gate (the server half lives in the `server` crate;
//! both consume the shared `gate` crate).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
