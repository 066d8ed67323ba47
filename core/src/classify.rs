//! Response classification: status code to error variant, body to detail.
//!
//! 200..=399 is success. 400..=499 becomes `Error::Client`; everything else
//! becomes `Error::Server`, including codes outside 100..=599 which this API
//! never documents.

use http::StatusCode;

use crate::error::{ApiError, Error};
use crate::http::{find_header, HttpResponse};

const UNKNOWN_PHRASE: &str = "Unknown Status";

/// Classify a fully read response. The response is only consumed on the
/// error path; the body moves into the returned `ApiError`.
pub fn classify(response: HttpResponse) -> Result<HttpResponse, Error> {
    match response.status {
        200..=399 => Ok(response),
        400..=499 => Err(Error::Client(into_api_error(response))),
        _ => Err(Error::Server(into_api_error(response))),
    }
}

fn into_api_error(response: HttpResponse) -> ApiError {
    ApiError::new(response.status, response.headers, response.body)
}

/// Standard reason phrase for `status`, e.g. `"Not Found"`.
pub fn phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or(UNKNOWN_PHRASE)
}

/// Longer description for a client error status. Server errors carry the
/// phrase alone.
fn description(status: u16) -> Option<&'static str> {
    let text = match status {
        400 => "Bad request syntax or unsupported method",
        401 => "No permission -- see authorization schemes",
        402 => "No payment -- see charging schemes",
        403 => "Request forbidden -- authorization will not help",
        404 => "Nothing matches the given URI",
        405 => "Specified method is invalid for this resource",
        406 => "URI not available in preferred format",
        407 => "You must authenticate with this proxy before proceeding",
        408 => "Request timed out; try again later",
        409 => "Request conflict",
        410 => "URI no longer exists and has been permanently removed",
        411 => "Client must specify Content-Length",
        412 => "Precondition in headers is false",
        413 => "Entity is too large",
        414 => "URI is too long",
        415 => "Entity body in unsupported format",
        416 => "Cannot satisfy request range",
        417 => "Expect condition could not be satisfied",
        418 => "Server refuses to brew coffee because it is a teapot",
        421 => "Server is not able to produce a response",
        428 => "The origin server requires the request to be conditional",
        429 => "The user has sent too many requests in a given amount of time",
        431 => "The server is unwilling to process the request because its header fields are too large",
        451 => "The server is denying access to the resource as a consequence of a legal demand",
        _ => return None,
    };
    Some(text)
}

/// Derive the human-readable detail for an error response.
///
/// Never fails: undecodable text or unparseable JSON falls through to the
/// phrase-based forms.
pub fn detail(status: u16, headers: &[(String, String)], body: &[u8]) -> String {
    let phrase = phrase(status);
    if let Some(text) = body_message(headers, body) {
        return format!("{phrase}: {text}");
    }
    match description(status) {
        Some(description) => format!("{phrase}: {description}"),
        None => phrase.to_string(),
    }
}

fn body_message(headers: &[(String, String)], body: &[u8]) -> Option<String> {
    let content_type = find_header(headers, "content-type")?;
    let mut tokens = content_type.split(';').map(str::trim);
    if tokens.any(|t| t.eq_ignore_ascii_case("text/plain")) {
        return std::str::from_utf8(body).ok().map(str::to_string);
    }
    let mut tokens = content_type.split(';').map(str::trim);
    if tokens.any(|t| t.eq_ignore_ascii_case("application/json")) {
        return match serde_json::from_slice(body) {
            Ok(serde_json::Value::String(text)) => Some(text),
            _ => None,
        };
    }
    None
}
