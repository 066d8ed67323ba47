//! Async entry point: one method per API operation.
//!
//! Each call builds the request with `MetMuseumClient`, sends it through
//! the `Transport`, drains the scoped response and hands it back to the
//! client for classification and validation. Nothing is retried or cached,
//! and a facade shared across tasks holds no per-call state.

use tracing::{debug, Instrument};
use uuid::Uuid;

use crate::client::MetMuseumClient;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::object::ObjectRecord;
use crate::query::{ListObjectsParams, SearchParams};
use crate::transport::Transport;
use crate::types::{DepartmentList, ObjectSummaryList, SearchResultList};

#[derive(Debug, Clone)]
pub struct MetMuseum<T> {
    client: MetMuseumClient,
    transport: T,
}

#[cfg(feature = "reqwest")]
impl MetMuseum<crate::transport::network::ReqwestTransport> {
    /// Facade over the network transport.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be built.
    pub fn from_config(config: &crate::config::ClientConfig) -> Result<Self> {
        let transport = crate::transport::network::ReqwestTransport::new(config)?;
        Ok(Self::new(MetMuseumClient::new(&config.base_url), transport))
    }
}

impl<T: Transport> MetMuseum<T> {
    pub fn new(client: MetMuseumClient, transport: T) -> Self {
        Self { client, transport }
    }

    /// Facade against the public endpoint.
    pub fn with_transport(transport: T) -> Self {
        Self::new(MetMuseumClient::default(), transport)
    }

    pub fn client(&self) -> &MetMuseumClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Identifiers of objects matching the filters.
    pub async fn list_objects(&self, params: &ListObjectsParams) -> Result<ObjectSummaryList> {
        let request = self.client.build_list_objects(params);
        let response = self.send(&request).await?;
        self.client.parse_list_objects(response)
    }

    /// Full record for one object.
    pub async fn get_object(&self, id: u64) -> Result<ObjectRecord> {
        let request = self.client.build_get_object(id);
        let response = self.send(&request).await?;
        self.client.parse_get_object(response)
    }

    pub async fn list_departments(&self) -> Result<DepartmentList> {
        let request = self.client.build_list_departments();
        let response = self.send(&request).await?;
        self.client.parse_list_departments(response)
    }

    /// Identifiers of objects matching a search.
    ///
    /// A half-specified date range fails before anything is sent.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResultList> {
        let request = self.client.build_search(params)?;
        let response = self.send(&request).await?;
        self.client.parse_search(response)
    }

    /// Send `request` and read its body. The scoped response is released
    /// inside `HttpResponse::read` on every path, including when this
    /// future is dropped mid-read.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let span = tracing::debug_span!("request", id = %Uuid::new_v4());
        async {
            debug!(method = request.method.as_str(), url = %request.url, "dispatching request");
            let scoped = self.transport.request(request).await?;
            let response = HttpResponse::read(scoped).await?;
            debug!(status = response.status, url = %response.url, "received response");
            Ok::<_, Error>(response)
        }
        .instrument(span)
        .await
    }
}
