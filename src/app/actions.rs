//! Actions representing side effects to be executed by the session runtime.
//!
//! The event handler never performs I/O. When a transition needs the outside
//! world, it returns an [`Action`] and the runtime carries it out. Today the
//! only such side effect is running a search.
//!
//! # Example
//!
//! ```rust
//! use ncosearch::app::Action;
//! use ncosearch::service::SearchRequest;
//!
//! let actions = vec![Action::Search(SearchRequest::exact(1, "medic"))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::service::SearchRequest;

/// Commands produced by the event handler for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a search against the search service.
    ///
    /// The runtime must feed the settled result back as
    /// `Event::SearchCompleted` carrying the request's generation.
    Search(SearchRequest),
}
