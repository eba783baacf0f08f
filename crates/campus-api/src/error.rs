//! Transport error types.

use thiserror::Error;

/// Errors that can occur when talking to the academic-records backend.
///
/// This is the pipeline's sole error channel: the collection normalizer
/// and the view deriver degrade instead of failing.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection, timeout, invalid URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-2xx status. `message` is the response body
    /// text, or the status line when the body is empty.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a backend response into the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}
