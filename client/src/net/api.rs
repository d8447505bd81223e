//! Resource calls proxied through the BFF.
//!
//! Every call goes through the interceptor-wrapped transport handed to
//! `ApiClient::new`, so session credentials travel with it and a 401 anywhere
//! invalidates the session. Non-401 failures come back as `ApiError` for the
//! calling view to interpret.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::BffConfig;
use crate::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::net::types::{ConfirmResponse, NewProfile, Order, RegisterRequest, RegisterResponse, UserProfile};

const PROFILE_SERVICE: &str = "profile";

#[derive(Clone)]
pub struct ApiClient<T> {
    http: T,
    config: BffConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(http: T, config: BffConfig) -> Self {
        Self { http, config }
    }

    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.http.send(request).await?.into_success()
    }

    // =========================================================================
    // PROFILE
    // =========================================================================

    /// Fetch the caller's profile; `None` when none has been created yet.
    ///
    /// # Errors
    ///
    /// Any failure other than 404.
    pub async fn get_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        match self.call(ApiRequest::get(self.config.api_url("profile"))).await {
            Ok(resp) => resp.json().map(Some),
            Err(ApiError::Status { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn create_profile(&self, profile: &NewProfile) -> Result<UserProfile, ApiError> {
        let request = ApiRequest::post(self.config.api_url("profile")).json(profile)?;
        self.call(request).await?.json()
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_profile(&self) -> Result<(), ApiError> {
        self.call(ApiRequest::delete(self.config.api_url("profile"))).await?;
        Ok(())
    }

    // =========================================================================
    // ORDERS
    // =========================================================================

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.call(ApiRequest::get(self.config.api_url("orders"))).await?.json()
    }

    /// Create an order; the order service fills in number and owner.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn create_order(&self) -> Result<Order, ApiError> {
        let request = ApiRequest::post(self.config.api_url("orders")).json(&serde_json::json!({}))?;
        self.call(request).await?.json()
    }

    // =========================================================================
    // REGISTRATION (anonymous)
    // =========================================================================

    /// # Errors
    ///
    /// Propagates transport, status and decode failures. A server `message`
    /// is preserved in `ApiError::Status`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let request = ApiRequest::post(self.config.public_url(PROFILE_SERVICE, "register")).json(request)?;
        self.call(request).await?.json()
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn confirm(&self, token: &str) -> Result<ConfirmResponse, ApiError> {
        let request = ApiRequest::get(self.config.public_url(PROFILE_SERVICE, "confirm")).query("token", token);
        self.call(request).await?.json()
    }
}
