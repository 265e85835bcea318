//! Jemsonnn - Portfolio website
//!
//! A single-page portfolio built with Leptos and WebAssembly, animated by a
//! controller that ties every transition to the lifetime of the section
//! that started it.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
