use serde::{Deserialize, Serialize};

/// Where the backend REST API lives.
///
/// Production serves the API under the same origin at `/api`; a
/// different origin (local backend, staging) is baked in at build time
/// through the `EVENTRA_API_URL` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
        }
    }
}

impl ApiConfig {
    /// Config with an explicit base URL (tests, local tooling).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL resolved at compile time for this build.
    pub fn from_build_env() -> Self {
        match option_env!("EVENTRA_API_URL") {
            Some(url) if !url.is_empty() => Self::with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Join an endpoint path onto the base, normalizing slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
