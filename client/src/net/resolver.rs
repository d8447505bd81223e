//! Session resolver: turns "unknown" into "authenticated" or "anonymous".
//!
//! SYSTEM CONTEXT
//! ==============
//! Called once by the startup sequence and again by the login view. Login and
//! logout themselves are full-page trips through the BFF; when the browser
//! comes back, the app boots fresh and this runs again.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (network, non-2xx, malformed body) collapses into
//! `NoSession` and leaves the holder empty. The cause is logged, not
//! returned.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::config::BffConfig;
use crate::error::ApiError;
use crate::net::transport::{ApiRequest, Transport};
use crate::net::types::UserClaims;
use crate::state::session::{Identity, SessionStore};

/// The only failure the resolver exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no authenticated session")]
pub struct NoSession;

#[derive(Clone)]
pub struct SessionResolver<T> {
    http: T,
    session: SessionStore,
    config: BffConfig,
}

impl<T: Transport> SessionResolver<T> {
    /// `http` is expected to be the interceptor-wrapped transport.
    pub fn new(http: T, session: SessionStore, config: BffConfig) -> Self {
        Self { http, session, config }
    }

    /// Ask the BFF who is signed in and record the answer in the holder.
    ///
    /// Safe to call concurrently: each call re-derives the answer and the
    /// last write wins.
    ///
    /// # Errors
    ///
    /// Returns `NoSession` when no identity could be established.
    pub async fn resolve(&self) -> Result<Identity, NoSession> {
        match self.fetch_identity().await {
            Ok(identity) => {
                log::debug!("session resolved for {}", identity.subject_id());
                self.session.write(Some(identity.clone()));
                Ok(identity)
            }
            Err(err) => {
                log::debug!("session resolution failed: {err}");
                self.session.clear();
                Err(NoSession)
            }
        }
    }

    async fn fetch_identity(&self) -> Result<Identity, ApiError> {
        let request = ApiRequest::get(self.config.user_url()).without_login_redirect();
        let response = self.http.send(request).await?.into_success()?;
        let claims: UserClaims = response.json()?;
        claims
            .into_identity()
            .ok_or_else(|| ApiError::Decode("empty subject".to_owned()))
    }
}
