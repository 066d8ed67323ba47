//! `Transport` over `reqwest` with rustls.

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest};
use crate::transport::{ScopedResponse, Transport};

/// Network transport. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TransportError::new)?;
        Ok(Self { http })
    }

    /// Wrap an existing client, keeping its settings.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

fn method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    type Response = ReqwestResponse;

    async fn request(&self, request: &HttpRequest) -> Result<Self::Response, TransportError> {
        let mut builder = self.http.request(method(request.method), &request.url);
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        let inner = builder.send().await.map_err(TransportError::new)?;
        let headers = inner
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        Ok(ReqwestResponse {
            url: inner.url().to_string(),
            headers,
            inner,
        })
    }
}

/// A live `reqwest` response; the connection goes back to the pool or is
/// closed when this is dropped.
#[derive(Debug)]
pub struct ReqwestResponse {
    url: String,
    headers: Vec<(String, String)>,
    inner: reqwest::Response,
}

#[async_trait]
impl ScopedResponse for ReqwestResponse {
    fn url(&self) -> &str {
        &self.url
    }

    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    async fn read_body(self) -> Result<Vec<u8>, TransportError> {
        let bytes = self.inner.bytes().await.map_err(TransportError::new)?;
        Ok(bytes.to_vec())
    }
}
