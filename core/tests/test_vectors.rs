//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Request vectors describe parameters and the exact request they must
//! produce, query order included. Classification vectors describe a raw
//! response and the outcome `parse_*` must report for it.

use metmuseum_core::{
    Error, HttpMethod, HttpResponse, ListObjectsParams, MetMuseumClient, SearchParams,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> MetMuseumClient {
    MetMuseumClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn pairs(value: &Value) -> Option<Vec<(String, String)>> {
    let pairs = value.as_array()?;
    Some(
        pairs
            .iter()
            .map(|p| {
                let arr = p.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect(),
    )
}

fn strings(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()
        .map(|a| a.iter().map(|s| s.as_str().unwrap().to_string()).collect())
}

fn year(value: &Value) -> Option<i32> {
    value.as_i64().map(|y| i32::try_from(y).unwrap())
}

// ---------------------------------------------------------------------------
// List objects
// ---------------------------------------------------------------------------

fn list_params(input: &Value) -> ListObjectsParams {
    ListObjectsParams {
        metadata_date: input["metadata_date"].as_str().map(|d| d.parse().unwrap()),
        department_ids: input["department_ids"].as_array().map(|ids| {
            ids.iter()
                .map(|id| u32::try_from(id.as_u64().unwrap()).unwrap())
                .collect()
        }),
    }
}

#[test]
fn list_objects_test_vectors() {
    let raw = include_str!("../../test-vectors/list_objects.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        let req = c.build_list_objects(&list_params(&case["input"]));
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert_eq!(req.query, pairs(&expected_req["query"]), "{name}: query");
        assert!(req.body.is_none(), "{name}: body");
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

fn search_params(input: &Value) -> SearchParams {
    SearchParams {
        q: input["q"].as_str().unwrap().to_string(),
        is_highlight: input["is_highlight"].as_bool(),
        title: input["title"].as_bool(),
        tags: input["tags"].as_bool(),
        department_id: input["department_id"]
            .as_u64()
            .map(|id| u32::try_from(id).unwrap()),
        is_on_view: input["is_on_view"].as_bool(),
        artist_or_culture: input["artist_or_culture"].as_bool(),
        medium: strings(&input["medium"]),
        has_images: input["has_images"].as_bool(),
        geo_location: strings(&input["geo_location"]),
        date_begin: year(&input["date_begin"]),
        date_end: year(&input["date_end"]),
    }
}

#[test]
fn search_test_vectors() {
    let raw = include_str!("../../test-vectors/search.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = c.build_search(&search_params(&case["input"]));

        if let Some(kind) = case["expected_error"].as_str() {
            assert_eq!(kind, "client_request", "{name}: unknown error kind");
            let err = result.expect_err(name);
            assert!(matches!(err, Error::ClientRequest(_)), "{name}: {err:?}");
            continue;
        }

        let expected_req = &case["expected_request"];
        let req = result.unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert_eq!(req.query, pairs(&expected_req["query"]), "{name}: query");
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn classify_test_vectors() {
    let raw = include_str!("../../test-vectors/classify.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = u16::try_from(case["status"].as_u64().unwrap()).unwrap();
        let headers = case["content_type"]
            .as_str()
            .map(|ct| vec![("Content-Type".to_string(), ct.to_string())])
            .unwrap_or_default();
        let response = HttpResponse {
            url: format!("{BASE_URL}/search"),
            status,
            headers,
            body: case["body"].as_str().unwrap().as_bytes().to_vec(),
        };
        let expected = &case["expected"];

        let result = c.parse_search(response);
        match (expected["kind"].as_str().unwrap(), result) {
            ("ok", Ok(_)) => {}
            ("validation", Err(Error::Validation(_))) => {}
            ("client", Err(Error::Client(api))) | ("server", Err(Error::Server(api))) => {
                assert_eq!(api.status(), status, "{name}: status");
                assert_eq!(api.detail(), expected["detail"].as_str().unwrap(), "{name}: detail");
            }
            (kind, other) => panic!("{name}: expected {kind}, got {other:?}"),
        }
    }
}
