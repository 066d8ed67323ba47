//! Typed client core for the Metropolitan Museum of Art collection API.
//!
//! # Overview
//! Four read-only operations: list object ids, fetch one object, list
//! departments, search. Requests are built from typed parameters, sent
//! through a pluggable `Transport`, classified by status code, and the JSON
//! body is normalized and validated into typed records.
//!
//! # Design
//! - `MetMuseumClient` is the sans-IO core: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`. It holds only the
//!   base URL.
//! - `MetMuseum<T: Transport>` is the async facade that composes the two
//!   halves around a transport round-trip.
//! - Upstream field conventions are loose (`""` for "no value", numbers as
//!   strings); a per-record table drives normalization before validation,
//!   and validation reports every bad field at once.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod facade;
pub mod http;
mod normalize;
pub mod object;
pub mod query;
pub mod transport;
pub mod types;
mod validate;

pub use client::MetMuseumClient;
pub use config::ClientConfig;
pub use error::{ApiError, ClientRequestError, Error, Issue, IssueReason, Result, TransportError, ValidationError};
pub use facade::MetMuseum;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use object::{Constituent, DimensionEntry, MeasurementGroup, Measurements, ObjectRecord, Tag};
pub use query::{ListObjectsParams, SearchParams};
pub use transport::fake::{FakeResponse, FakeTransport};
#[cfg(feature = "reqwest")]
pub use transport::network::ReqwestTransport;
pub use transport::{ScopedResponse, Transport};
pub use types::{Department, DepartmentList, ObjectSummaryList, SearchResultList};
