//! Errors raised while talking to the website API

use thiserror::Error;

/// A failed fetch or parse against the website API.
///
/// Every variant is reported on the diagnostic channel and otherwise
/// swallowed by the store; nothing here is shown to the end user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connecting or sending the request failed
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read as text
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A log path segment that URL normalization would collapse or drop
    #[error("invalid path segment {segment:?}: empty, '.' and '..' are not website names")]
    InvalidSegment { segment: String },

    /// The response body was not a JSON array
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// URL of the request that failed, if one was issued
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Client(_) | FetchError::InvalidSegment { .. } => None,
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. }
            | FetchError::Decode { url, .. } => Some(url),
        }
    }
}
