//! In-memory `Transport` for tests.
//!
//! Serves canned responses keyed by request URL (without query), records
//! every request it receives and counts how many responses have been
//! released, so tests can assert on both what was sent and that the scoped
//! resource was let go.

use std::future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::HttpRequest;
use crate::transport::{ScopedResponse, Transport};

/// A canned response.
#[derive(Debug, Clone)]
pub struct FakeResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Never finish reading the body.
    pub stall: bool,
}

impl FakeResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
            stall: false,
        }
    }

    pub fn json(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, body).header("Content-Type", "application/json")
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn stalled(mut self) -> Self {
        self.stall = true;
        self
    }
}

#[derive(Debug, Default)]
pub struct FakeTransport {
    routes: Vec<(String, FakeResponse)>,
    requests: Mutex<Vec<HttpRequest>>,
    released: Arc<AtomicUsize>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `url` with `response`.
    pub fn route(mut self, url: impl Into<String>, response: FakeResponse) -> Self {
        self.routes.push((url.into(), response));
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many responses have been dropped.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    type Response = FakeScopedResponse;

    async fn request(&self, request: &HttpRequest) -> Result<Self::Response, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        let (_, response) = self
            .routes
            .iter()
            .find(|(url, _)| *url == request.url)
            .ok_or_else(|| TransportError::new(format!("no route for {}", request.url)))?;
        Ok(FakeScopedResponse {
            url: request.url.clone(),
            response: response.clone(),
            released: Arc::clone(&self.released),
        })
    }
}

/// Response handed out by `FakeTransport`; counts itself released on drop.
#[derive(Debug)]
pub struct FakeScopedResponse {
    url: String,
    response: FakeResponse,
    released: Arc<AtomicUsize>,
}

impl Drop for FakeScopedResponse {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ScopedResponse for FakeScopedResponse {
    fn url(&self) -> &str {
        &self.url
    }

    fn status(&self) -> u16 {
        self.response.status
    }

    fn headers(&self) -> &[(String, String)] {
        &self.response.headers
    }

    async fn read_body(self) -> Result<Vec<u8>, TransportError> {
        if self.response.stall {
            future::pending::<()>().await;
        }
        Ok(self.response.body.clone())
    }
}
