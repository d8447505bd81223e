//! Error taxonomy for calls that leave the browser.
//!
//! ERROR HANDLING
//! ==============
//! `Unauthorized` is the only variant the core reacts to (via the
//! interceptor). Everything else is handed back to the calling view, which
//! decides what notice to show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a call routed through the BFF.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The BFF answered 401; the session has already been invalidated.
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx answer.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A 2xx body that does not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Browser-only call attempted during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Text for a user-facing notice: the server's `message` when present,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
