//! # client
//!
//! Leptos + WASM front-end for the shader studio: the HTML document shell,
//! theme and toast providers, library and studio pages, and the REST client
//! for the shader API.
//!
//! Compiled twice: with `ssr` for server-side rendering inside the `server`
//! binary, and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod site;
pub mod state;
pub mod theme;

/// Browser entry point; invoked by the generated JS glue after the WASM
/// module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
