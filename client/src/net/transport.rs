//! HTTP transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call to the BFF is described as an `ApiRequest` and handed to a
//! `Transport`. The browser build sends it with `gloo-net`; tests substitute
//! an in-memory transport. The interceptor is itself a `Transport` wrapping
//! another one, so resource code never knows which layers sit below it.
//!
//! A transport returns `Ok` for every HTTP answer, whatever the status.
//! Only failures to get an answer at all are `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Outgoing request, independent of the browser fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send the session cookie along (fetch `credentials: include`).
    pub with_credentials: bool,
    /// Whether a 401 on this request should navigate to the login route.
    pub redirect_on_unauthorized: bool,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            with_credentials: false,
            redirect_on_unauthorized: true,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Set a header, replacing any earlier value with the same name.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Attach a JSON body and the matching content type.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if `body` cannot be serialized.
    pub fn json<T: Serialize>(self, body: &T) -> Result<Self, ApiError> {
        let raw = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(raw);
        Ok(request)
    }

    /// Keep 401 handling local: state is still cleared, but no login redirect
    /// is issued. Used by the resolver, whose callers decide where to go.
    #[must_use]
    pub fn without_login_redirect(mut self) -> Self {
        self.redirect_on_unauthorized = false;
        self
    }
}

/// Status and raw body of an HTTP answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `message` field of a JSON error body, if there is one.
    pub fn error_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        value.get("message")?.as_str().map(str::to_owned)
    }

    /// Turn a non-2xx answer into `ApiError::Status`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` carrying the server message for non-2xx statuses.
    pub fn into_success(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.error_message();
            Err(ApiError::Status { status: self.status, message })
        }
    }
}

/// Something that can carry an `ApiRequest` to the BFF.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// A body that cannot be read is a transport failure, not an empty body.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn read_body<E: std::fmt::Display>(text: Result<String, E>) -> Result<String, ApiError> {
    text.map_err(|e| ApiError::Network(format!("reading response body: {e}")))
}

/// Browser fetch transport. Outside the `hydrate` build it reports
/// `ApiError::Unavailable`, so server rendering never performs I/O.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if request.with_credentials {
                builder = builder.credentials(web_sys::RequestCredentials::Include);
            }
            let outgoing = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = outgoing.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = read_body(resp.text().await)?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
