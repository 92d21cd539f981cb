//! View model types representing renderable session state.
//!
//! A [`SessionSnapshot`] is computed from the session by
//! `SearchSession::snapshot()` and consumed by the renderer. It contains no
//! business logic, only display-ready data, and is never stored back into the
//! session.
//!
//! # Example
//!
//! ```rust
//! use ncosearch::app::SearchSession;
//!
//! let snapshot = SearchSession::default().snapshot();
//! assert!(!snapshot.has_searched);
//! assert!(snapshot.visible_rows.is_empty());
//! ```

use crate::app::pagination::PageRange;
use crate::app::{PageSize, SearchMode};
use crate::domain::Occupation;

/// Read-only view of a session at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub query: String,
    pub mode: SearchMode,

    /// Selected semantic page size. Meaningless in exact mode.
    pub page_size: PageSize,

    pub current_page: usize,
    pub total_pages: usize,
    pub result_count: usize,

    /// Rows on the current page, numbered across the whole result set.
    pub visible_rows: Vec<ResultRow>,

    /// Range for the "Showing X to Y of Z results" line.
    pub page_range: Option<PageRange>,

    /// A search is in flight.
    pub loading: bool,

    /// At least one search has been dispatched. Gates the results panel.
    pub has_searched: bool,

    /// Semantic mode and at least one row carries a score.
    pub show_similarity: bool,
}

impl SessionSnapshot {
    /// Whether the pagination controls are shown.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// 1-based position within the full result set.
    pub ordinal: usize,
    pub occupation: Occupation,
}
