//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns intents from the
//! rendering surface, and search completions from the runtime, into session
//! state changes and actions.
//!
//! # Architecture
//!
//! 1. The rendering surface emits an intent, or the runtime reports a settled search
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations occur via `SearchSession` methods
//! 4. Actions are collected and returned for the runtime to execute
//!
//! Every call returns `(should_render, actions)`. Intents are applied
//! synchronously, so the very next render sees them even while a search is
//! still in flight.
//!
//! # Example
//!
//! ```rust
//! use ncosearch::app::{handle_event, Action, Event, SearchSession};
//!
//! let mut session = SearchSession::default();
//! handle_event(&mut session, Event::SetQuery("medic".to_string()));
//! let (render, actions) = handle_event(&mut session, Event::Dispatch);
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Search(_)]));
//! ```

use super::modes::{PageSize, SearchMode};
use crate::app::{Action, SearchSession};
use crate::service::SearchOutcome;

/// Intents from the rendering surface, plus the search completion resume.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces the query text. Does not search.
    SetQuery(String),

    /// Selects the mode for the next search. Does not search or clear results.
    SetMode(SearchMode),

    /// Selects a semantic page size and returns to page 1. Ignored in exact mode.
    SetPageSize(PageSize),

    /// Moves to a page, clamped to the available range.
    SetPage(usize),

    /// Starts a search with the current query and mode, unless one is in flight.
    Dispatch,

    /// Reports that the search with `generation` settled.
    ///
    /// Produced by the runtime, never by the rendering surface.
    SearchCompleted {
        /// Generation of the request that settled.
        generation: u64,
        /// Records or failure.
        outcome: SearchOutcome,
    },
}

/// Processes an event, mutates the session, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is false when the event left
/// the visible state unchanged (dropped dispatch, ignored page size, stale
/// completion).
pub fn handle_event(session: &mut SearchSession, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(&event)).entered();

    match event {
        Event::SetQuery(text) => {
            session.set_query(text);
            (true, vec![])
        }
        Event::SetMode(mode) => {
            if session.mode() == mode {
                return (false, vec![]);
            }
            session.set_mode(mode);
            (true, vec![])
        }
        Event::SetPageSize(size) => (session.set_page_size(size), vec![]),
        Event::SetPage(page) => {
            let before = session.current_page();
            session.set_page(page);
            (session.current_page() != before, vec![])
        }
        Event::Dispatch => session
            .begin_search()
            .map_or_else(|| (false, vec![]), |request| (true, vec![Action::Search(request)])),
        Event::SearchCompleted { generation, outcome } => {
            (session.complete_search(generation, outcome), vec![])
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SetQuery(_) => "set_query",
        Event::SetMode(_) => "set_mode",
        Event::SetPageSize(_) => "set_page_size",
        Event::SetPage(_) => "set_page",
        Event::Dispatch => "dispatch",
        Event::SearchCompleted { .. } => "search_completed",
    }
}
