//! Client configuration, set once at application start.

use std::time::Duration;

/// Base URL used when `PROFOLIO_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// How long a cached response stays fresh before it is revalidated.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// Configuration injected into [`crate::ApiClient`] at construction.
///
/// Built once when the application launches and read-only afterwards;
/// there is no support for swapping the API origin at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute origin of the remote REST API, e.g. `https://api.profolio.app/api/v1`.
    pub base_url: String,
    /// Freshness window for the serve-cached-then-revalidate policy.
    pub cache_ttl: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl ApiConfig {
    /// Read the API origin from `PROFOLIO_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`]. Never fails; a malformed origin surfaces later
    /// as request errors, which the fetchers absorb.
    pub fn from_env() -> Self {
        let base_url = std::env::var("PROFOLIO_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Override the origin, keeping the default cache window.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
