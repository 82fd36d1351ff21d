//! # client
//!
//! Leptos + WASM frontend for the FuturePath landing site and its signed-in
//! area.
//!
//! The session gate (session hook, route guards, signup flow) is plain Rust
//! under `state`, `util` and `net`, driven by thin Leptos components in
//! `components` and `pages`. The `server` crate renders `app::shell` for SSR;
//! the browser bundle hydrates it through `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
