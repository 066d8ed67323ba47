use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, API_PREFIX};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(
            Request::builder()
                .uri(format!("{API_PREFIX}{uri}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap()
}

fn ids(body: &Value) -> Vec<u64> {
    body["objectIDs"]
        .as_array()
        .map(|ids| ids.iter().map(|id| id.as_u64().unwrap()).collect())
        .unwrap_or_default()
}

// --- objects ---

#[tokio::test]
async fn list_objects_returns_everything_without_filters() {
    let resp = get("/objects").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["total"], 3);
    assert_eq!(ids(&body), vec![45734, 436535, 1]);
}

#[tokio::test]
async fn list_objects_filters_by_department() {
    let body = body_json(get("/objects?departmentIds=6%7C1").await).await;
    assert_eq!(ids(&body), vec![45734, 1]);
}

#[tokio::test]
async fn list_objects_empty_department_filter_means_all() {
    let body = body_json(get("/objects?departmentIds=").await).await;
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn list_objects_future_date_has_null_ids() {
    let body = body_json(get("/objects?metadataDate=2999-01-01").await).await;
    assert_eq!(body["total"], 0);
    assert!(body["objectIDs"].is_null());
}

#[tokio::test]
async fn list_objects_rejects_malformed_metadata_date() {
    for date in ["2020-02-30", "yesterday", "20", "2020-01-0%C3%A9"] {
        let resp = get(&format!("/objects?metadataDate={date}")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{date}");
    }
}

#[tokio::test]
async fn list_objects_metadata_date_compares_calendar_days() {
    let body = body_json(get("/objects?metadataDate=2023-02-07").await).await;
    assert_eq!(ids(&body), vec![436535, 1]);
}

#[tokio::test]
async fn list_objects_invalid_departments_is_bad_gateway() {
    let resp = get("/objects?departmentIds=invalid").await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

// --- single object ---

#[tokio::test]
async fn get_object_returns_wire_record() {
    let resp = get("/objects/45734").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["title"], "Quail and Millet");
    assert_eq!(body["GalleryNumber"], "");
}

#[tokio::test]
async fn get_object_not_found_is_json_string() {
    let resp = get("/objects/1233").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(body_json(resp).await, "Object not found");
}

#[tokio::test]
async fn get_object_invalid_id_is_plain_text() {
    let resp = get("/objects/invalid").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.headers()[http::header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(&body_bytes(resp).await[..], b"ObjectID must be an integer");
}

// --- departments ---

#[tokio::test]
async fn departments_are_listed_in_order() {
    let body = body_json(get("/departments").await).await;
    let ids: Vec<u64> = body["departments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["departmentId"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 6, 11, 21]);
}

// --- search ---

#[tokio::test]
async fn search_matches_title_artist_and_tags() {
    let body = body_json(get("/search?q=birds").await).await;
    assert_eq!(ids(&body), vec![45734]);
    let body = body_json(get("/search?q=gogh").await).await;
    assert_eq!(ids(&body), vec![436535]);
}

#[tokio::test]
async fn search_applies_filters() {
    let body = body_json(
        get("/search?q=wheat&isHighlight=true&medium=Canvas&geoLocation=France&dateBegin=1800&dateEnd=1900")
            .await,
    )
    .await;
    assert_eq!(ids(&body), vec![436535]);

    let body = body_json(get("/search?q=wheat&dateBegin=1900&dateEnd=2000").await).await;
    assert_eq!(body["total"], 0);
    assert!(body["objectIDs"].is_null());
}

#[tokio::test]
async fn search_has_images_excludes_imageless_objects() {
    let body = body_json(get("/search?q=coin&hasImages=true").await).await;
    assert_eq!(body["total"], 0);
    let body = body_json(get("/search?q=coin&hasImages=false").await).await;
    assert_eq!(ids(&body), vec![1]);
}

#[tokio::test]
async fn search_without_q_is_bad_gateway() {
    let resp = get("/search").await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
