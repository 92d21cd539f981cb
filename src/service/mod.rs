//! Search service boundary.
//!
//! The search backend is an external collaborator. The session only ever sees
//! it through the [`SearchService`] trait and the request/outcome messages in
//! [`messages`].
//!
//! # Modules
//!
//! - [`messages`]: Request and outcome types with trace context propagation
//! - [`http`]: [`HttpSearchService`], a client for the NCO FastAPI backend
//!
//! [`perform_search`] is the dispatch boundary: it runs one request against a
//! service and converts any failure into [`SearchOutcome::Failed`], so nothing
//! escapes into the session.

pub mod http;
pub mod messages;

pub use http::HttpSearchService;
pub use messages::{SearchKind, SearchOutcome, SearchRequest, TraceContext};

use crate::domain::{Occupation, Result};
use async_trait::async_trait;
use tracing::Instrument;

/// Backend able to answer exact and semantic occupation searches.
///
/// Both operations return records in service order. An empty list means
/// no matches.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Literal match against title, division, and family. No scores.
    async fn exact_search(&self, query: &str) -> Result<Vec<Occupation>>;

    /// Ranked match. Every record carries a similarity score and the list
    /// holds at most `limit` records.
    async fn semantic_search(&self, query: &str, limit: usize) -> Result<Vec<Occupation>>;
}

/// Executes one search request and returns its outcome.
///
/// Failures are logged and folded into [`SearchOutcome::Failed`]. The span
/// created here follows from the dispatching span when the request carries a
/// trace context.
pub async fn perform_search<S>(service: &S, request: &SearchRequest) -> SearchOutcome
where
    S: SearchService + ?Sized,
{
    let span = tracing::info_span!(
        "search",
        generation = request.generation,
        kind = ?request.kind,
        query = %request.query,
    );
    if let Some(parent) = request.trace_context.as_ref().and_then(TraceContext::to_otel_context) {
        use tracing_opentelemetry::OpenTelemetrySpanExt;
        span.set_parent(parent);
    }

    async {
        let result = match request.kind {
            SearchKind::Exact => service.exact_search(&request.query).await,
            SearchKind::Semantic { limit } => {
                let result = service.semantic_search(&request.query, limit).await;
                if let Ok(records) = &result {
                    if records.len() > limit {
                        tracing::warn!(
                            limit = limit,
                            returned = records.len(),
                            "semantic search returned more records than requested"
                        );
                    }
                }
                result
            }
        };

        match result {
            Ok(records) => {
                tracing::debug!(result_count = records.len(), "search service answered");
                SearchOutcome::Found { records }
            }
            Err(e) => {
                tracing::warn!(error = %e, "search service call failed");
                SearchOutcome::Failed { message: e.to_string() }
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NcoSearchError;

    struct FixedService;

    #[async_trait]
    impl SearchService for FixedService {
        async fn exact_search(&self, query: &str) -> Result<Vec<Occupation>> {
            Ok(vec![Occupation::new(query, "31-9099.01", "31-9099.00")])
        }

        async fn semantic_search(&self, _query: &str, _limit: usize) -> Result<Vec<Occupation>> {
            Err(NcoSearchError::Service {
                endpoint: "/semantic_search".to_string(),
                status: 503,
                message: "index not loaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn exact_request_reaches_exact_operation() {
        let outcome = perform_search(&FixedService, &SearchRequest::exact(1, "medic")).await;
        match outcome {
            SearchOutcome::Found { records } => assert_eq!(records[0].title, "medic"),
            SearchOutcome::Failed { message } => panic!("unexpected failure: {message}"),
        }
    }

    #[tokio::test]
    async fn service_error_becomes_failed_outcome() {
        let outcome = perform_search(&FixedService, &SearchRequest::semantic(2, "medic", 10)).await;
        match outcome {
            SearchOutcome::Failed { message } => assert!(message.contains("503")),
            SearchOutcome::Found { .. } => panic!("expected failure"),
        }
    }
}
