//! BFF endpoint configuration.
//!
//! The base URL is fixed at compile time from `PORTAL_BFF_URL` so the WASM
//! bundle and the SSR build agree on it without a runtime fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BFF_URL: &str = "/bff";

/// Location of the backend-for-frontend and the endpoints hanging off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BffConfig {
    base_url: String,
}

impl Default for BffConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BFF_URL)
    }
}

impl BffConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self { base_url: trimmed.to_owned() }
    }

    /// Build from the `PORTAL_BFF_URL` compile-time variable, default `/bff`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PORTAL_BFF_URL").unwrap_or(DEFAULT_BFF_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current-user endpoint consumed by the session resolver.
    pub fn user_url(&self) -> String {
        format!("{}/user", self.base_url)
    }

    /// Full-page navigation target that starts the identity-provider handshake.
    pub fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Full-page navigation target that terminates the server session.
    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.base_url)
    }

    /// Authenticated resource proxied under `{bff}/api`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Anonymous resource proxied under `{bff}/public/{service}`.
    pub fn public_url(&self, service: &str, path: &str) -> String {
        format!("{}/public/{service}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
