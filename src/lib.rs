//! # friendconnect
//!
//! Leptos + WASM presentation layer for the FriendConnect social app: chat
//! transcript and composer, reward cards, navigation bar, and a voice room
//! panel with a simulated connection.
//!
//! Component state lives in plain records under `state`, so every transition
//! is unit-tested without a browser. Browser APIs (permissions, media,
//! scrolling, timers) are confined to `util` behind the `hydrate` feature.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
