//! Search session state and snapshot computation.
//!
//! This module defines [`SearchSession`], the single owner of everything the
//! search view knows: query text, mode, page size, current page, the last
//! result set, and the request lifecycle. Fields are private; the only way to
//! change them is through the transition methods, which the event handler
//! calls in response to intents.
//!
//! # State Machine
//!
//! ```text
//!            dispatch                 complete (matching generation)
//!   Idle ─────────────► Searching ─────────────────────────────► Ready
//!                          ▲  │ dispatch: dropped                  │
//!                          │  └──────────┘                         │
//!                          └───────────────────────────────────────┘
//!                                         dispatch
//! ```
//!
//! # Derived State
//!
//! Visible rows, total pages, and the showing-range line are never stored.
//! [`SearchSession::snapshot`] recomputes them from the live result list on
//! every call, which is what keeps the `All` page size honest across searches
//! that return different counts.
//!
//! # Known Race
//!
//! A dispatch while a search is in flight is dropped rather than queued, so a
//! slow request started for an older query still installs its results when it
//! settles, even if the query text has changed since. The generation counter
//! only guarantees that a completion belongs to the request currently in
//! flight; it does not make the old request obsolete.
//!
//! # Example
//!
//! ```rust
//! use ncosearch::app::{SearchSession, SessionSettings};
//! use ncosearch::service::SearchOutcome;
//!
//! let mut session = SearchSession::new(SessionSettings::default());
//! session.set_query("medic");
//! let request = session.begin_search().unwrap();
//! session.complete_search(request.generation, SearchOutcome::Found { records: vec![] });
//! assert!(session.has_searched());
//! ```

use super::modes::{PageSize, SearchMode, SessionPhase};
use super::pagination::{clamp_page, page_range, paginate, total_pages};
use crate::domain::occupation::duplicate_code_count;
use crate::domain::Occupation;
use crate::service::{SearchOutcome, SearchRequest};
use crate::ui::viewmodel::{ResultRow, SessionSnapshot};

/// Page size used in exact mode, where page size selection has no effect.
pub const DEFAULT_EXACT_PAGE_SIZE: usize = 20;

/// Limit requested from semantic search when the page size is `All`.
pub const DEFAULT_SEMANTIC_ALL_LIMIT: usize = 1000;

/// Fixed parameters of a session, taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Rows per page in exact mode.
    pub exact_page_size: usize,

    /// Semantic search limit used while the page size is `All`.
    pub semantic_all_limit: usize,

    /// Mode the session starts in.
    pub initial_mode: SearchMode,

    /// Semantic page size the session starts with.
    pub initial_page_size: PageSize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            exact_page_size: DEFAULT_EXACT_PAGE_SIZE,
            semantic_all_limit: DEFAULT_SEMANTIC_ALL_LIMIT,
            initial_mode: SearchMode::Exact,
            initial_page_size: PageSize::Ten,
        }
    }
}

/// State of one browsing session.
#[derive(Debug, Clone)]
pub struct SearchSession {
    settings: SessionSettings,
    query: String,
    mode: SearchMode,
    page_size: PageSize,
    current_page: usize,
    results: Vec<Occupation>,
    phase: SessionPhase,
    has_searched: bool,
    /// Generation of the most recent dispatch. Zero before the first one.
    generation: u64,
}

impl SearchSession {
    /// Creates an idle session with no results.
    #[must_use]
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            query: String::new(),
            mode: settings.initial_mode,
            page_size: settings.initial_page_size,
            current_page: 1,
            results: Vec::new(),
            phase: SessionPhase::Idle,
            has_searched: false,
            generation: 0,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn results(&self) -> &[Occupation] {
        &self.results
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True strictly between dispatch and settlement.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Searching
    }

    #[must_use]
    pub const fn has_searched(&self) -> bool {
        self.has_searched
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Replaces the query text. Never triggers a search.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        tracing::trace!(query = %self.query, "query updated");
    }

    /// Selects the mode for the next dispatched search.
    ///
    /// Results and the current page are left untouched.
    pub fn set_mode(&mut self, mode: SearchMode) {
        tracing::debug!(from = %self.mode, to = %mode, "search mode changed");
        self.mode = mode;
    }

    /// Selects a semantic page size and returns to page 1.
    ///
    /// Ignored in exact mode, where the page size is fixed. Returns whether
    /// the selection was applied.
    pub fn set_page_size(&mut self, size: PageSize) -> bool {
        if self.mode != SearchMode::Semantic {
            tracing::debug!(page_size = %size, "page size ignored outside semantic mode");
            return false;
        }

        self.page_size = size;
        self.current_page = 1;
        tracing::debug!(page_size = %size, "page size changed");
        true
    }

    /// Moves to page `page`, clamped to the pages the current results span.
    pub fn set_page(&mut self, page: usize) {
        let clamped = clamp_page(page, self.total_pages());
        if clamped != page {
            tracing::debug!(requested = page, clamped = clamped, "page clamped");
        }
        self.current_page = clamped;
    }

    /// Page size that governs pagination right now.
    ///
    /// Semantic mode resolves the selected size against the live result
    /// count; exact mode uses the configured fixed size.
    #[must_use]
    pub fn effective_page_size(&self) -> usize {
        match self.mode {
            SearchMode::Semantic => self.page_size.resolve(self.results.len()),
            SearchMode::Exact => self.settings.exact_page_size,
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.results.len(), self.effective_page_size())
    }

    /// Rows on the current page.
    #[must_use]
    pub fn visible_rows(&self) -> &[Occupation] {
        paginate(&self.results, self.current_page, self.effective_page_size())
    }

    /// Enters `Searching` and returns the request to execute.
    ///
    /// Returns `None`, leaving the state untouched, when a search is already
    /// in flight: at most one request is outstanding and later dispatches are
    /// dropped, not queued.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        if self.phase == SessionPhase::Searching {
            tracing::debug!(
                in_flight_generation = self.generation,
                "search already in flight, dropping dispatch"
            );
            return None;
        }

        self.generation += 1;
        self.phase = SessionPhase::Searching;
        self.has_searched = true;

        let request = match self.mode {
            SearchMode::Exact => SearchRequest::exact(self.generation, self.query.clone()),
            SearchMode::Semantic => {
                let limit = self.page_size.resolve(self.settings.semantic_all_limit);
                SearchRequest::semantic(self.generation, self.query.clone(), limit)
            }
        };

        tracing::debug!(
            generation = self.generation,
            mode = %self.mode,
            query = %self.query,
            "search dispatched"
        );

        Some(request)
    }

    /// Settles the in-flight search and enters `Ready`.
    ///
    /// A failed outcome installs an empty result list; it is logged but not
    /// otherwise distinguishable from a search with no matches. Completions
    /// that do not match the in-flight generation are discarded. Returns
    /// whether the state changed.
    pub fn complete_search(&mut self, generation: u64, outcome: SearchOutcome) -> bool {
        if self.phase != SessionPhase::Searching || generation != self.generation {
            tracing::debug!(
                generation = generation,
                current_generation = self.generation,
                phase = ?self.phase,
                "discarding stale search completion"
            );
            return false;
        }

        if let SearchOutcome::Failed { message } = &outcome {
            tracing::warn!(generation = generation, error = %message, "search failed, showing no results");
        }

        let records = outcome.into_records();

        let duplicates = duplicate_code_count(&records);
        if duplicates > 0 {
            tracing::debug!(duplicates = duplicates, "response repeats NCO 2015 codes");
        }

        tracing::debug!(
            generation = generation,
            result_count = records.len(),
            "search settled"
        );

        self.results = records;
        self.current_page = 1;
        self.phase = SessionPhase::Ready;
        self.has_searched = true;
        true
    }

    /// Computes the read-only snapshot consumed by the rendering surface.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let page_size = self.effective_page_size();
        let offset = self.current_page.saturating_sub(1).saturating_mul(page_size);

        let visible_rows = self
            .visible_rows()
            .iter()
            .enumerate()
            .map(|(index, occupation)| ResultRow {
                ordinal: offset + index + 1,
                occupation: occupation.clone(),
            })
            .collect();

        SessionSnapshot {
            query: self.query.clone(),
            mode: self.mode,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages(),
            result_count: self.results.len(),
            visible_rows,
            page_range: page_range(self.results.len(), self.current_page, page_size),
            loading: self.is_loading(),
            has_searched: self.has_searched,
            show_similarity: self.mode == SearchMode::Semantic
                && self.results.iter().any(|r| r.similarity_score.is_some()),
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
