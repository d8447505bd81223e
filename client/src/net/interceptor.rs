//! Request interceptor wrapping every call to the BFF.
//!
//! SYSTEM CONTEXT
//! ==============
//! Outgoing: attaches the session cookie (`credentials: include`) and the
//! `X-Requested-With: XMLHttpRequest` marker the BFF uses to answer API calls
//! with 401 instead of a login redirect.
//!
//! Incoming: a 401 clears the session holder and sends the app to the login
//! route, then the call still fails with `ApiError::Unauthorized` so the
//! calling view can run its own error handling. Every other answer passes
//! through untouched.
//!
//! ORDERING
//! ========
//! The reaction fires once per 401 answer. Concurrent 401s each clear the
//! holder (idempotent) and redirect through `redirect_once`, which is a no-op
//! once the app is on or heading to the login route. Redirecting is an
//! in-app navigation, not an HTTP call, so it cannot re-enter the
//! interceptor.
//!
//! Requests built with `ApiRequest::without_login_redirect` are exempt from
//! the redirect half: the holder is still cleared, but no navigation is
//! issued. The session resolver uses this for `{bff}/user`, so resolving at
//! boot does not push visitors off public routes such as `/register`.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use crate::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::routing::navigator::{Navigator, redirect_once};
use crate::routing::table::LOGIN_PATH;
use crate::state::session::SessionStore;

pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const XHR_MARKER: &str = "XMLHttpRequest";

const UNAUTHORIZED: u16 = 401;

#[derive(Clone)]
pub struct AuthInterceptor<T, N> {
    next: T,
    session: SessionStore,
    navigator: N,
}

impl<T, N> AuthInterceptor<T, N> {
    pub fn new(next: T, session: SessionStore, navigator: N) -> Self {
        Self { next, session, navigator }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}

impl<T: Transport, N: Navigator> AuthInterceptor<T, N> {
    fn on_unauthorized(&self, request: &ApiRequest) {
        log::warn!("{} answered 401; clearing session", request.url);
        self.session.clear();
        if request.redirect_on_unauthorized {
            redirect_once(&self.navigator, LOGIN_PATH);
        }
    }
}

/// Credentials and marker header added to every outgoing request.
pub fn decorate(request: ApiRequest) -> ApiRequest {
    let mut request = request.header(REQUESTED_WITH_HEADER, XHR_MARKER);
    request.with_credentials = true;
    request
}

impl<T: Transport, N: Navigator> Transport for AuthInterceptor<T, N> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = decorate(request);
        let response = self.next.send(request.clone()).await?;
        if response.status == UNAUTHORIZED {
            self.on_unauthorized(&request);
            return Err(ApiError::Unauthorized);
        }
        Ok(response)
    }
}
