//! Error types for the NCO search session.
//!
//! This module defines the centralized error type [`NcoSearchError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented using
//! the `thiserror` crate.
//!
//! The session itself never surfaces these errors: a failed search is caught at
//! the dispatch boundary and treated as an empty result. The variants here are
//! what the search service, configuration loader, and theme loader report
//! before that boundary.

use thiserror::Error;

/// The main error type for NCO search operations.
///
/// # Examples
///
/// ```
/// use ncosearch::domain::NcoSearchError;
///
/// fn validate_base_url(url: &str) -> Result<(), NcoSearchError> {
///     if url.is_empty() {
///         return Err(NcoSearchError::Config("base_url must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_base_url("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum NcoSearchError {
    /// The HTTP request could not be sent or the connection failed.
    ///
    /// Wraps transport-level errors from `reqwest` (DNS, refused connection,
    /// broken body stream).
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        /// Backend endpoint path, e.g. `/exact_search`.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The search service answered with a non-success status.
    #[error("Search service returned {status} for {endpoint}: {message}")]
    Service {
        /// Backend endpoint path.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body or error detail.
        message: String,
    },

    /// The response payload could not be decoded into occupation records.
    #[error("Malformed response from {endpoint}: {message}")]
    Decode {
        /// Backend endpoint path.
        endpoint: String,
        /// Decoder error description.
        message: String,
    },

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for NCO search operations.
pub type Result<T> = std::result::Result<T, NcoSearchError>;
