//! Error types for the collection API client.
//!
//! # Design
//! `Error` is a closed sum type: a failed call is exactly one of a rejected
//! precondition, a 4xx answer, a 5xx answer, a body that failed validation,
//! or an opaque transport failure. `Client` and `Server` share the
//! `ApiError` payload but stay distinct variants so callers can apply
//! different policies to each.

use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

use crate::classify;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter combination was rejected before any request was sent.
    #[error(transparent)]
    ClientRequest(#[from] ClientRequestError),

    /// The server answered with a status in 400..=499.
    #[error("client error {}: {}", .0.status(), .0.detail())]
    Client(ApiError),

    /// The server answered with a status in 500..=599, or one outside the
    /// range this API defines.
    #[error("server error {}: {}", .0.status(), .0.detail())]
    Server(ApiError),

    /// The response body did not match the expected record shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport failed to complete the exchange.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// The HTTP error payload, for `Client` and `Server` errors.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Client(e) | Error::Server(e) => Some(e),
            _ => None,
        }
    }
}

/// Precondition failure detected while building a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid request: {0}")]
pub struct ClientRequestError(pub String);

/// An HTTP error answer: status, headers and raw body as received.
///
/// The human-readable detail is derived from the body and its content type
/// on first access and cached.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    detail: OnceLock<String>,
}

impl ApiError {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            detail: OnceLock::new(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Human-readable description, e.g. `"Not Found: Object not found"`.
    pub fn detail(&self) -> &str {
        self.detail
            .get_or_init(|| classify::detail(self.status, &self.headers, &self.body))
    }
}

/// Opaque failure raised by a `Transport` implementation.
#[derive(Debug, Error)]
#[error("transport error: {0}")]
pub struct TransportError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }

    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueReason {
    /// The body is empty or is not JSON at all.
    Unparseable(String),
    Missing,
    WrongType { expected: &'static str },
    NotPositive,
    Negative,
    InvalidUrl(String),
    InvalidTimestamp(String),
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueReason::Unparseable(msg) => write!(f, "body is not valid JSON ({msg})"),
            IssueReason::Missing => write!(f, "missing required field"),
            IssueReason::WrongType { expected } => write!(f, "expected {expected}"),
            IssueReason::NotPositive => write!(f, "must be greater than zero"),
            IssueReason::Negative => write!(f, "must not be negative"),
            IssueReason::InvalidUrl(msg) => write!(f, "invalid URL ({msg})"),
            IssueReason::InvalidTimestamp(msg) => write!(f, "invalid timestamp ({msg})"),
        }
    }
}

/// One offending field: where it is and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// JSON-path-like location using wire names, e.g. `$.tags[2].term`.
    pub path: String,
    pub reason: IssueReason,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// The response body failed structural validation. Lists every issue found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Whether any issue sits at exactly `path`.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "response failed validation ({} issue", self.issues.len())?;
        if self.issues.len() != 1 {
            write!(f, "s")?;
        }
        write!(f, ")")?;
        for issue in &self.issues {
            write!(f, "; {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn transport_error_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::from(TransportError::new(io));
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn validation_error_lists_every_issue() {
        let err = ValidationError::new(vec![
            Issue {
                path: "$.total".to_string(),
                reason: IssueReason::Negative,
            },
            Issue {
                path: "$.objectIDs[1]".to_string(),
                reason: IssueReason::NotPositive,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "response failed validation (2 issues); $.total: must not be negative; \
             $.objectIDs[1]: must be greater than zero"
        );
    }

    #[test]
    fn api_error_detail_is_cached() {
        let err = ApiError::new(
            404,
            vec![("Content-Type".to_string(), "text/plain".to_string())],
            b"gone".to_vec(),
        );
        let first = err.detail() as *const str;
        let second = err.detail() as *const str;
        assert_eq!(first, second);
        assert_eq!(err.detail(), "Not Found: gone");
    }

    #[test]
    fn api_error_accessor_only_for_http_errors() {
        let err = Error::from(ClientRequestError("bad".to_string()));
        assert!(err.api_error().is_none());
        let err = Error::Server(ApiError::new(500, Vec::new(), Vec::new()));
        assert_eq!(err.api_error().unwrap().status(), 500);
    }
}
