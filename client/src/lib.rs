//! # client
//!
//! Leptos + WASM application shell for the secure microservice portal.
//!
//! The shell authenticates against a backend-for-frontend (BFF) session,
//! gates protected routes on the in-memory session, and proxies the profile
//! and order resources through an interceptor that reacts to session expiry.
//!
//! LAYOUT
//! ======
//! `state` holds the session and startup phase, `net` owns every HTTP
//! concern (transport, interceptor, resolver, resource calls), `routing`
//! decides admission and performs in-app redirects, and `pages`/`components`
//! render the views.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: installs console logging and hydrates the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
