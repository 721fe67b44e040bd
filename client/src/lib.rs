//! # client
//!
//! Leptos + WASM frontend for tic-tac-toe and its nine-board meta variant.
//! Game rules live in the backend service; this crate creates sessions,
//! renders boards, forwards clicks and aggregates nested outcomes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: wire logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
