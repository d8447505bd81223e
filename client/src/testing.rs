//! In-memory doubles for the transport and navigation seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::routing::navigator::Navigator;

/// Replays queued answers and records every request it receives.
#[derive(Clone, Default)]
pub struct MockTransport {
    answers: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.answers.lock().unwrap().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn respond_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.respond(status, &body.to_string())
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.answers.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().last().cloned().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no answer queued".to_owned())))
    }
}

/// Navigator that moves instantly and remembers where it went.
#[derive(Clone)]
pub struct RecordingNavigator {
    current: Arc<Mutex<String>>,
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { current: Arc::new(Mutex::new(path.to_owned())), visits: Arc::default() }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn navigate(&self, path: &str) {
        *self.current.lock().unwrap() = path.to_owned();
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

pub fn user_claims_json() -> serde_json::Value {
    serde_json::json!({
        "sub": "u1",
        "preferred_username": "alice",
        "email": "a@x.com",
        "name": "Alice A"
    })
}
