//! Cloudflare API error types.

use thiserror::Error;

/// Result type for Cloudflare API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the Cloudflare API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status code.
    #[error("Cloudflare API returned {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    /// The response envelope reported `success: false`.
    #[error("Cloudflare API error: {0}")]
    Envelope(String),

    /// Connection, timeout or protocol-level failure.
    #[error("HTTP error occurred: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("Invalid response from Cloudflare API: {0}")]
    Decode(String),

    /// The request URL could not be built from the base URL.
    #[error("Invalid request URL: {0}")]
    Url(String),
}

impl ApiError {
    /// Create a new status error.
    pub fn status(status: reqwest::StatusCode, detail: impl Into<String>) -> Self {
        Self::Status {
            status,
            detail: detail.into(),
        }
    }

    /// Create a new decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a new URL error.
    pub fn url(msg: impl Into<String>) -> Self {
        Self::Url(msg.into())
    }
}
