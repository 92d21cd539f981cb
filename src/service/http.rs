//! HTTP client for the NCO search backend.
//!
//! The backend is a small FastAPI application exposing:
//!
//! - `GET /exact_search?query=<q>`: case-insensitive title match
//! - `GET /semantic_search?query=<q>&k=<limit>`: vector similarity, ranked
//!
//! Both return a JSON array of occupation rows. Error bodies from FastAPI
//! look like `{"detail": ...}`; the detail is kept when present.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use super::SearchService;
use crate::domain::{NcoSearchError, Occupation, Result};

/// Backend address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const EXACT_ENDPOINT: &str = "/exact_search";
const SEMANTIC_ENDPOINT: &str = "/semantic_search";

/// A [`SearchService`] backed by the NCO FastAPI backend.
///
/// # Example
///
/// ```rust,no_run
/// use ncosearch::service::{HttpSearchService, SearchService};
///
/// # async fn run() -> ncosearch::Result<()> {
/// let service = HttpSearchService::new("http://127.0.0.1:8000")?;
/// let rows = service.semantic_search("army doctor", 10).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpSearchService {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    detail: serde_json::Value,
}

impl HttpSearchService {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`NcoSearchError::Config`] if `base_url` is empty or not an
    /// `http`/`https` URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a service around an existing `reqwest` client.
    ///
    /// # Errors
    ///
    /// Same as [`HttpSearchService::new`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(NcoSearchError::Config("base_url must not be empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(NcoSearchError::Config(format!(
                "base_url must start with http:// or https://, got '{base_url}'"
            )));
        }

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Vec<Occupation>> {
        let url = format!("{}{endpoint}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|source| {
                error!(endpoint = endpoint, error = %source, "request failed");
                NcoSearchError::Request {
                    endpoint: endpoint.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| NcoSearchError::Request {
            endpoint: endpoint.to_string(),
            source,
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| match e.detail {
                    serde_json::Value::String(detail) => detail,
                    other => other.to_string(),
                })
                .unwrap_or(body);

            error!(endpoint = endpoint, %status, "search service error");
            return Err(NcoSearchError::Service {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(endpoint = endpoint, error = %e, "failed to parse response");
            NcoSearchError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn exact_search(&self, query: &str) -> Result<Vec<Occupation>> {
        debug!(query_len = query.len(), "exact search");
        self.fetch(EXACT_ENDPOINT, &[("query", query.to_string())]).await
    }

    async fn semantic_search(&self, query: &str, limit: usize) -> Result<Vec<Occupation>> {
        debug!(query_len = query.len(), limit = limit, "semantic search");
        self.fetch(
            SEMANTIC_ENDPOINT,
            &[("query", query.to_string()), ("k", limit.to_string())],
        )
        .await
    }
}
