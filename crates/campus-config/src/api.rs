//! Backend API configuration.

use serde::{Deserialize, Serialize};

/// Default backend base URL.
fn default_base_url() -> String {
    String::from("http://localhost:8080")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the academic-records backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Base URL with any trailing slash removed, so paths can be appended.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn trimmed_base_url_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://records.example.edu/".into(),
            ..ApiConfig::default()
        };
        assert_eq!(config.trimmed_base_url(), "https://records.example.edu");
    }
}
