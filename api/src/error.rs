//! Error types for the remote API client.

use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`].
///
/// The domain fetchers absorb all of these and substitute empty defaults;
/// only code talking to the client directly ever sees them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, timeout, abort). Carries the underlying
    /// error unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the JSON error body, if any.
        message: String,
        /// The parsed error body, when the API sent one.
        details: Option<serde_json::Value>,
    },

    /// The response body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for API errors, `None` for transport/decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
