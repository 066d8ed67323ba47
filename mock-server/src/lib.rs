//! Stand-in for the collection API, serving a small fixed catalogue.
//!
//! Mirrors upstream behaviour that clients must cope with: `objectIDs` is
//! `null` when nothing matches, a malformed `departmentIds` filter gets a
//! 502 rather than a 400, unknown objects get a 404 with a JSON string
//! body, and non-numeric object ids get a plain-text 400.

#![recursion_limit = "256"]

pub mod catalog;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Path prefix upstream serves the API under.
pub const API_PREFIX: &str = "/public/collection/v1";

#[derive(Debug)]
pub struct Catalog {
    objects: Vec<Value>,
}

impl Catalog {
    pub fn fixtures() -> Self {
        Self {
            objects: catalog::objects(),
        }
    }

    fn find(&self, id: u64) -> Option<&Value> {
        self.objects.iter().find(|o| object_id(o) == id)
    }
}

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    let db: Db = Arc::new(Catalog::fixtures());
    let api = Router::new()
        .route("/objects", get(list_objects))
        .route("/objects/{id}", get(get_object))
        .route("/departments", get(list_departments))
        .route("/search", get(search))
        .with_state(db);
    Router::new().nest(API_PREFIX, api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn object_id(object: &Value) -> u64 {
    object["objectID"].as_u64().unwrap_or_default()
}

fn id_list(ids: Vec<u64>) -> Json<Value> {
    let total = ids.len();
    let ids = if ids.is_empty() { Value::Null } else { json!(ids) };
    Json(json!({ "total": total, "objectIDs": ids }))
}

/// Upstream answers bad filters with a gateway error and no useful body.
fn bad_gateway() -> Response {
    StatusCode::BAD_GATEWAY.into_response()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectsQuery {
    metadata_date: Option<String>,
    department_ids: Option<String>,
}

async fn list_objects(State(db): State<Db>, Query(params): Query<ObjectsQuery>) -> Response {
    let departments = match params.department_ids.as_deref().map(parse_ids) {
        Some(Some(ids)) => ids,
        Some(None) => {
            tracing::debug!(raw = ?params.department_ids, "rejecting departmentIds");
            return bad_gateway();
        }
        None => Vec::new(),
    };
    let since = match params.metadata_date.as_deref().map(parse_date) {
        Some(Some(date)) => Some(date),
        Some(None) => {
            return (StatusCode::BAD_REQUEST, Json("Invalid metadataDate")).into_response();
        }
        None => None,
    };

    let ids = db
        .objects
        .iter()
        .filter(|o| {
            departments.is_empty() || departments.contains(&i64::from(catalog::department_of(object_id(o))))
        })
        .filter(|o| match since {
            Some(date) => metadata_day(o).is_some_and(|day| day >= date),
            None => true,
        })
        .map(object_id)
        .collect();
    id_list(ids).into_response()
}

/// `|`-separated integers; an empty string means no filter.
fn parse_ids(raw: &str) -> Option<Vec<i64>> {
    if raw.is_empty() {
        return Some(Vec::new());
    }
    raw.split('|').map(|id| id.trim().parse().ok()).collect()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Day an object's metadata was last updated.
fn metadata_day(object: &Value) -> Option<NaiveDate> {
    let raw = object["metadataDate"].as_str()?;
    DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive())
}

async fn get_object(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "ObjectID must be an integer",
        )
            .into_response();
    };
    match db.find(id) {
        Some(object) => Json(object.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json("Object not found")).into_response(),
    }
}

async fn list_departments() -> Json<Value> {
    Json(catalog::departments())
}

async fn search(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(q) = params.get("q").map(|q| q.to_lowercase()) else {
        return bad_gateway();
    };
    let flag = |key: &str| params.get(key).map(|v| v == "true");
    let year = |key: &str| params.get(key).and_then(|v| v.parse::<i64>().ok());
    let list = |key: &str| {
        params
            .get(key)
            .map(|v| v.split('|').map(str::to_lowercase).collect::<Vec<_>>())
    };

    let department = match params.get("departmentId").map(|d| d.parse::<u32>()) {
        Some(Ok(id)) => Some(id),
        Some(Err(_)) => return bad_gateway(),
        None => None,
    };
    let title_only = flag("title") == Some(true);
    let tags_only = flag("tags") == Some(true);
    let artist_only = flag("artistOrCulture") == Some(true);
    let is_highlight = flag("isHighlight");
    let has_images = flag("hasImages");
    let medium = list("medium");
    let geo = list("geoLocation");
    let range = year("dateBegin").zip(year("dateEnd"));

    let text = |o: &Value, key: &str| o[key].as_str().unwrap_or_default().to_lowercase();
    let ids = db
        .objects
        .iter()
        .filter(|o| {
            let in_title = text(o, "title").contains(&q);
            let in_artist =
                text(o, "artistDisplayName").contains(&q) || text(o, "culture").contains(&q);
            let in_tags = o["tags"].as_array().is_some_and(|tags| {
                tags.iter()
                    .any(|t| t["term"].as_str().unwrap_or_default().to_lowercase().contains(&q))
            });
            if title_only {
                in_title
            } else if tags_only {
                in_tags
            } else if artist_only {
                in_artist
            } else {
                in_title || in_artist || in_tags
            }
        })
        .filter(|o| is_highlight.map_or(true, |h| o["isHighlight"] == h))
        .filter(|o| has_images.map_or(true, |h| !text(o, "primaryImage").is_empty() == h))
        .filter(|o| department.map_or(true, |d| catalog::department_of(object_id(o)) == d))
        .filter(|o| {
            medium
                .as_ref()
                .map_or(true, |m| m.iter().any(|m| text(o, "medium").contains(m.as_str())))
        })
        .filter(|o| {
            geo.as_ref().map_or(true, |g| {
                g.iter().any(|g| {
                    text(o, "country").contains(g.as_str()) || text(o, "city").contains(g.as_str())
                })
            })
        })
        .filter(|o| {
            range.map_or(true, |(begin, end)| {
                let object_year = |key: &str| match &o[key] {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.parse().ok(),
                    _ => None,
                };
                match (object_year("objectBeginDate"), object_year("objectEndDate")) {
                    (Some(b), Some(e)) => b <= end && e >= begin,
                    _ => false,
                }
            })
        })
        .map(object_id)
        .collect();
    id_list(ids).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ids_accepts_pipe_separated_integers() {
        assert_eq!(parse_ids("1|6|-3"), Some(vec![1, 6, -3]));
        assert_eq!(parse_ids(""), Some(Vec::new()));
        assert_eq!(parse_ids("1|x"), None);
    }

    #[test]
    fn metadata_date_filter_parses_calendar_dates() {
        assert_eq!(parse_date("2020-01-01"), NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(parse_date("2020-02-30"), None);
        assert_eq!(parse_date("yesterday!"), None);
        assert_eq!(parse_date("2020"), None);
        assert_eq!(parse_date("2020-01-0é"), None);
    }

    #[test]
    fn metadata_day_tolerates_malformed_timestamps() {
        assert_eq!(
            metadata_day(&json!({"metadataDate": "2020-09-14T12:26:37.48Z"})),
            NaiveDate::from_ymd_opt(2020, 9, 14)
        );
        assert_eq!(metadata_day(&json!({"metadataDate": "2020"})), None);
        assert_eq!(metadata_day(&json!({"metadataDate": "é"})), None);
        assert_eq!(metadata_day(&json!({})), None);
    }

    #[test]
    fn id_list_uses_null_for_no_hits() {
        let Json(body) = id_list(Vec::new());
        assert_eq!(body, json!({"total": 0, "objectIDs": null}));
        let Json(body) = id_list(vec![1, 2]);
        assert_eq!(body, json!({"total": 2, "objectIDs": [1, 2]}));
    }

    #[test]
    fn fixtures_have_unique_ids() {
        let catalog = Catalog::fixtures();
        let mut ids: Vec<u64> = catalog.objects.iter().map(object_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.objects.len());
        assert!(catalog.find(45734).is_some());
    }
}
