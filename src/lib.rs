//! # marquee
//!
//! Leptos + WASM front-end for browsing movies and TV shows.
//!
//! The crate's core is the client session: a `SessionStore` that owns the
//! signed-in user and token with write-through persistence to
//! `localStorage`, and an `AuthGate` component that renders protected views
//! only for a valid session and otherwise redirects to the login page.

pub mod app;
pub mod clock;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod storage;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
