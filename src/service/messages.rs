//! Search request and outcome types.
//!
//! A [`SearchRequest`] is what the session emits when a search is dispatched;
//! a [`SearchOutcome`] is what comes back when that request settles. The
//! session never awaits anything itself: the runtime executes the request and
//! delivers the outcome as an `Event::SearchCompleted`.
//!
//! Requests carry a [`TraceContext`] so the span that executes the search
//! links to the span that dispatched it, even though the two run at
//! different points of the event loop.

use crate::domain::Occupation;
use serde::{Deserialize, Serialize};

/// Tracing context captured at dispatch time.
///
/// Holds the OpenTelemetry trace and span IDs of the dispatching span as hex
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the dispatching span.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace context of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is not valid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Rebuilds a remote OpenTelemetry context from the captured IDs.
    ///
    /// Returns `None` if either ID fails to parse.
    #[must_use]
    pub fn to_otel_context(&self) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::current().with_remote_span_context(span_context))
    }
}

/// Which search service operation a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchKind {
    /// `ExactSearch(query)`.
    Exact,

    /// `SemanticSearch(query, limit)`.
    Semantic {
        /// Maximum number of records requested.
        limit: usize,
    },
}

/// A search emitted by the session on dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Generation of the dispatch that produced this request.
    ///
    /// The matching completion must echo it back; anything else is stale.
    pub generation: u64,

    /// Query text at dispatch time.
    pub query: String,

    pub kind: SearchKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_context: Option<TraceContext>,
}

impl SearchRequest {
    /// Creates an exact-match request with the current trace context.
    #[must_use]
    pub fn exact(generation: u64, query: impl Into<String>) -> Self {
        Self {
            generation,
            query: query.into(),
            kind: SearchKind::Exact,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Creates a semantic request bounded by `limit`, with the current trace context.
    #[must_use]
    pub fn semantic(generation: u64, query: impl Into<String>, limit: usize) -> Self {
        Self {
            generation,
            query: query.into(),
            kind: SearchKind::Semantic { limit },
            trace_context: TraceContext::from_current(),
        }
    }
}

/// Result of one settled search.
///
/// A failure carries only a message: the session treats it exactly like an
/// empty response, and the message exists for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The service answered with these records, in service order.
    Found {
        records: Vec<Occupation>,
    },

    /// The service call failed (network, non-success status, malformed payload).
    Failed {
        message: String,
    },
}

impl SearchOutcome {
    /// Records to install in the session. Empty for a failure.
    #[must_use]
    pub fn into_records(self) -> Vec<Occupation> {
        match self {
            Self::Found { records } => records,
            Self::Failed { .. } => Vec::new(),
        }
    }
}
