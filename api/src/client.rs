//! HTTP client wrapper around `reqwest`.
//!
//! Adds base-URL resolution, a time-bounded response cache, and uniform
//! error translation on top of the raw HTTP primitive. The cache only
//! exists on native targets; in the browser the fetch layer already
//! revalidates for us.

use crate::config::ApiConfig;
use crate::endpoints::Endpoints;
use crate::error::ApiError;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Instant,
};

/// Per-request override of the default serve-cached-then-revalidate policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Serve a cached body when it is younger than the configured TTL.
    #[default]
    UseCache,
    /// Always hit the network and do not store the response.
    Bypass,
}

#[cfg(not(target_arch = "wasm32"))]
struct CacheEntry {
    fetched_at: Instant,
    body: Value,
}

/// Client for the remote ProFolio REST API.
///
/// Cheap to clone; clones share the underlying connection pool and cache.
/// Configuration is injected once at construction and read-only after.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: Endpoints,
    config: ApiConfig,
    #[cfg(not(target_arch = "wasm32"))]
    cache: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints: Endpoints::new(&config.base_url),
            config,
            #[cfg(not(target_arch = "wasm32"))]
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The endpoint table derived from the configured base URL.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Resolve a path against the configured base URL.
    ///
    /// Absolute `http(s)://` URLs pass through untouched; anything else is
    /// joined to the base with exactly one `/` separator.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issue a GET and return the parsed JSON body.
    ///
    /// Non-2xx responses become [`ApiError::Api`], with the error body
    /// parsed best-effort (a secondary parse failure is swallowed).
    /// Network failures are logged and propagated unchanged inside
    /// [`ApiError::Transport`].
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        policy: CachePolicy,
    ) -> Result<Value, ApiError> {
        let request = self.http.get(self.resolve(path)).query(query).build()?;
        let url = request.url().to_string();

        #[cfg(not(target_arch = "wasm32"))]
        if policy == CachePolicy::UseCache {
            if let Some(body) = self.fresh_cached(&url) {
                tracing::debug!(%url, "serving cached response");
                return Ok(body);
            }
        }

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::error!(%url, error = %e, "request failed");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "api response");

        if !status.is_success() {
            let details: Option<Value> = response.json().await.ok();
            let message = details
                .as_ref()
                .and_then(|d| d.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("request failed")
                .to_string();
            tracing::warn!(%url, status = status.as_u16(), %message, "api error");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
                details,
            });
        }

        let body: Value = response.json().await?;

        #[cfg(not(target_arch = "wasm32"))]
        if policy == CachePolicy::UseCache {
            self.store(url, body.clone());
        }

        Ok(body)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn fresh_cached(&self, url: &str) -> Option<Value> {
        let cache = self.cache.lock().ok()?;
        let entry = cache.get(url)?;
        if entry.fetched_at.elapsed() < self.config.cache_ttl {
            Some(entry.body.clone())
        } else {
            None
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn store(&self, url: String, body: Value) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(
                url,
                CacheEntry {
                    fetched_at: Instant::now(),
                    body,
                },
            );
        }
    }
}
