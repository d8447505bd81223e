//! Full-page transitions through the BFF.
//!
//! Login and logout leave the application entirely; the BFF runs the
//! identity-provider handshake and redirects back. Nothing in memory survives
//! the round trip, so the app re-resolves the session when it boots again.

#[cfg(test)]
#[path = "bff_test.rs"]
mod bff_test;

use crate::config::BffConfig;
use crate::state::session::SessionStore;

/// Hand the browser to `{bff}/login`.
pub fn begin_login(config: &BffConfig) {
    leave_app(&config.login_url());
}

/// Clear the local session, then hand the browser to `{bff}/logout`.
pub fn end_session(config: &BffConfig, session: &SessionStore) {
    session.clear();
    leave_app(&config.logout_url());
}

fn leave_app(url: &str) {
    log::info!("leaving app for {url}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                log::warn!("navigation to {url} failed: {err:?}");
            }
        }
    }
}
