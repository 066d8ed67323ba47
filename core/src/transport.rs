//! The transport seam between the client and the network.
//!
//! # Design
//! A `Transport` turns an `HttpRequest` into a `ScopedResponse`: status and
//! headers are available at once, the body is read on demand. The scoped
//! response owns whatever connection backs it, so releasing it is tied to
//! its lifetime:
//! - `read_body` consumes the response, so the body cannot be read twice;
//! - dropping the response, or a future holding it, releases the
//!   connection on every exit path, including cancellation.
//!
//! Retries, redirects and timeouts are the transport's own business.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::HttpRequest;

pub mod fake;
#[cfg(feature = "reqwest")]
pub mod network;

/// Sends one request and yields its scoped response.
#[async_trait]
pub trait Transport: Send + Sync {
    type Response: ScopedResponse;

    async fn request(&self, request: &HttpRequest) -> Result<Self::Response, TransportError>;
}

/// A response whose connection is released when it is dropped.
#[async_trait]
pub trait ScopedResponse: Send {
    /// Final URL after any redirects.
    fn url(&self) -> &str;

    fn status(&self) -> u16;

    fn headers(&self) -> &[(String, String)];

    /// Read the whole body, consuming the response.
    async fn read_body(self) -> Result<Vec<u8>, TransportError>;
}
