//! Domain layer for the NCO search session.
//!
//! This module contains the core domain types, independent of the HTTP
//! backend, the terminal renderer, or the async runtime driving searches.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`occupation`]: Occupation classification record
//!
//! # Examples
//!
//! ```
//! use ncosearch::domain::{Occupation, Result};
//!
//! fn lookup() -> Result<Occupation> {
//!     Ok(Occupation::new("Combat Medic", "31-9099.01", "31-9099.00"))
//! }
//! ```

pub mod error;
pub mod occupation;

pub use error::{NcoSearchError, Result};
pub use occupation::Occupation;
