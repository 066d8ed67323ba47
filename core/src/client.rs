//! Stateless request builder and response parser for the collection API.
//!
//! # Design
//! `MetMuseumClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Whoever sits in between executes the round-trip: the
//! async `MetMuseum` facade through a `Transport`, or a host application
//! with its own HTTP library.

use crate::classify::classify;
use crate::config::DEFAULT_BASE_URL;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::object::ObjectRecord;
use crate::query::{ListObjectsParams, SearchParams};
use crate::types::{DepartmentList, ObjectSummaryList, SearchResultList};
use crate::validate::{validate, Record};

/// Synchronous, stateless client for the collection API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetMuseumClient {
    base_url: String,
}

impl Default for MetMuseumClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl MetMuseumClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_objects(&self, params: &ListObjectsParams) -> HttpRequest {
        let mut request = HttpRequest::get(format!("{}/objects", self.base_url));
        request.query = params.to_query();
        request
    }

    pub fn build_get_object(&self, id: u64) -> HttpRequest {
        HttpRequest::get(format!("{}/objects/{id}", self.base_url))
    }

    pub fn build_list_departments(&self) -> HttpRequest {
        HttpRequest::get(format!("{}/departments", self.base_url))
    }

    /// # Errors
    /// `Error::ClientRequest` when the date range is half-specified.
    pub fn build_search(&self, params: &SearchParams) -> Result<HttpRequest> {
        let mut request = HttpRequest::get(format!("{}/search", self.base_url));
        request.query = Some(params.to_query()?);
        Ok(request)
    }

    pub fn parse_list_objects(&self, response: HttpResponse) -> Result<ObjectSummaryList> {
        parse(response)
    }

    pub fn parse_get_object(&self, response: HttpResponse) -> Result<ObjectRecord> {
        parse(response)
    }

    pub fn parse_list_departments(&self, response: HttpResponse) -> Result<DepartmentList> {
        parse(response)
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<SearchResultList> {
        parse(response)
    }
}

/// Classify, then validate the body of a successful response.
fn parse<T: Record>(response: HttpResponse) -> Result<T> {
    let response = classify(response).inspect_err(|err| {
        tracing::warn!(error = %err, "request failed");
    })?;
    validate(&response.body).map_err(|err| {
        tracing::warn!(
            url = %response.url,
            issues = err.issues().len(),
            "response failed validation"
        );
        Error::Validation(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn client() -> MetMuseumClient {
        MetMuseumClient::new("https://fake.url")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            url: "https://fake.url".to_string(),
            status: 200,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn build_list_objects_without_params_has_no_query() {
        let req = client().build_list_objects(&ListObjectsParams::new());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://fake.url/objects");
        assert!(req.query.is_none());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_object_produces_path() {
        let req = client().build_get_object(45734);
        assert_eq!(req.url, "https://fake.url/objects/45734");
        assert!(req.query.is_none());
    }

    #[test]
    fn build_list_departments_produces_path() {
        let req = client().build_list_departments();
        assert_eq!(req.url, "https://fake.url/departments");
        assert!(req.query.is_none());
    }

    #[test]
    fn build_search_rejects_half_date_range() {
        let err = client()
            .build_search(&SearchParams::new("q").date_begin(1))
            .unwrap_err();
        assert!(matches!(err, Error::ClientRequest(_)));
    }

    #[test]
    fn build_search_sets_q() {
        let req = client().build_search(&SearchParams::new("sunflowers")).unwrap();
        assert_eq!(req.url, "https://fake.url/search");
        assert_eq!(req.query_param("q"), Some("sunflowers"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = MetMuseumClient::new("https://fake.url/");
        assert_eq!(client.build_list_departments().url, "https://fake.url/departments");
    }

    #[test]
    fn default_client_targets_public_api() {
        assert_eq!(MetMuseumClient::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn parse_search_success() {
        let result = client()
            .parse_search(ok(r#"{"total":3,"objectIDs":[436535,436529,484935]}"#))
            .unwrap();
        assert_eq!(result.ids, vec![436535, 436529, 484935]);
    }

    #[test]
    fn parse_empty_body_is_validation_error_even_on_success() {
        let err = client().parse_list_objects(ok("")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn parse_get_object_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            ..ok(r#""Object not found""#)
        };
        let err = client().parse_get_object(response).unwrap_err();
        match err {
            Error::Client(api) => assert_eq!(api.detail(), "Not Found: Object not found"),
            other => panic!("expected client error, got {other:?}"),
        }
    }

    #[test]
    fn parse_list_departments_server_error() {
        let response = HttpResponse {
            status: 502,
            ..ok("")
        };
        let err = client().parse_list_departments(response).unwrap_err();
        assert!(matches!(err, Error::Server(ref api) if api.status() == 502));
    }
}
