//! HTTP request/response values for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! client builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. Whoever executes the round-trip (a
//! `Transport` implementation or a host application using its own HTTP
//! library) converts between these values and the wire.
//!
//! Headers are kept as ordered `(name, value)` pairs; lookups are
//! case-insensitive.

use url::Url;

use crate::error::TransportError;
use crate::transport::ScopedResponse;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and carries no query component; `query` is `None` when
/// the request has no query parameters at all, which is distinct from an
/// empty parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Option<Vec<(String, String)>>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub(crate) fn get(url: String) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            query: None,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Value of the query parameter `key`, if present.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .as_ref()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The request URL with its percent-encoded query component appended.
    ///
    /// # Errors
    /// Returns the parse error if `url` is not an absolute URL.
    pub fn full_url(&self) -> Result<Url, url::ParseError> {
        match &self.query {
            Some(pairs) => Url::parse_with_params(&self.url, pairs),
            None => Url::parse(&self.url),
        }
    }
}

/// An HTTP response described as plain data, with the body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Final URL after any redirects the transport followed.
    pub url: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Drain a scoped transport response into plain data.
    ///
    /// The scoped response is consumed; its connection is released when the
    /// body read finishes, fails, or this future is dropped.
    pub async fn read<R: ScopedResponse>(response: R) -> Result<Self, TransportError> {
        let url = response.url().to_string();
        let status = response.status();
        let headers = response.headers().to_vec();
        let body = response.read_body().await?;
        Ok(Self {
            url,
            status,
            headers,
            body,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Case-insensitive header lookup over `(name, value)` pairs.
pub fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_without_query_has_no_question_mark() {
        let req = HttpRequest::get("https://example.org/v1/departments".to_string());
        assert_eq!(
            req.full_url().unwrap().as_str(),
            "https://example.org/v1/departments"
        );
    }

    #[test]
    fn full_url_encodes_query_pairs() {
        let mut req = HttpRequest::get("https://example.org/v1/objects".to_string());
        req.query = Some(vec![("departmentIds".to_string(), "1|3".to_string())]);
        assert_eq!(
            req.full_url().unwrap().as_str(),
            "https://example.org/v1/objects?departmentIds=1%7C3"
        );
    }

    #[test]
    fn header_lookup_ignores_case() {
        let headers = vec![("content-type".to_string(), "text/plain".to_string())];
        assert_eq!(find_header(&headers, "Content-Type"), Some("text/plain"));
        assert_eq!(find_header(&headers, "Accept"), None);
    }

    #[test]
    fn query_param_returns_none_without_query() {
        let req = HttpRequest::get("https://example.org".to_string());
        assert_eq!(req.query_param("q"), None);
    }
}
