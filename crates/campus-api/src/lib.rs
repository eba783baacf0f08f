//! # campus-api
//!
//! HTTP client for the academic-records backend.
//!
//! Fetches heterogeneous HAL-or-array collection responses and normalizes
//! them into plain entity lists, one resource module per endpoint family:
//! - `/students` (roster CRUD)
//! - `/modules` (catalogue CRUD)
//! - `/registrations` (enrollment edges)
//! - `/grades` (scores + server-side upsert)
//! - `/operations` (audit trail + revert)
//!
//! The client carries its base URL and optional bearer token explicitly;
//! nothing is read from ambient storage, so it can be exercised in
//! isolation. Errors are the transport layer's only failure channel —
//! normalization never throws (see [`hal`]).

pub mod hal;

mod error;
mod grades;
mod http;
mod modules;
mod operations;
mod registrations;
mod snapshot;
mod students;

pub use error::ApiError;
pub use grades::GradeUpsert;
pub use snapshot::Snapshot;

use std::time::Duration;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the academic-records backend.
///
/// Holds the backend base URL and, when the user is logged in, the bearer
/// token attached to every request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` with an optional bearer token.
    ///
    /// A `None` token means requests proceed unauthenticated; the backend
    /// is expected to reject writes with 401/403 in that case.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("campus/0.1")
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// The configured backend base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is configured.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Probe the backend health endpoint. `GET /profile`.
    ///
    /// Any error — transport or status — reads as "unreachable".
    pub async fn ping(&self) -> bool {
        self.request(reqwest::Method::GET, "/profile", None)
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/", None, 10);
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn token_marks_client_authenticated() {
        let client = ApiClient::new("http://localhost:8080", Some("tok".into()), 10);
        assert!(client.is_authenticated());
    }
}
