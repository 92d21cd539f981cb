//! Application layer: the search session state machine.
//!
//! This module sits between the rendering surface and the search service. It
//! owns every piece of mutable session state and the pure pagination math that
//! derives what is visible from it.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Intents → Events → Event Handler → State Mutations → Actions → Search Service
//!                        ↑                                            ↓
//!                        └──────────── SearchCompleted ───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Search mode, page size, and lifecycle phase types
//! - [`pagination`]: Pure page slicing and counting
//! - [`state`]: Session state container and snapshot computation
//!
//! # Example
//!
//! ```rust
//! use ncosearch::app::{handle_event, Event, SearchMode, SearchSession};
//!
//! let mut session = SearchSession::default();
//! let (render, actions) = handle_event(&mut session, Event::SetMode(SearchMode::Semantic));
//! assert!(render);
//! assert!(actions.is_empty());
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{PageSize, SearchMode, SessionPhase};
pub use state::{SearchSession, SessionSettings};
