//! Error types and handling for the MCP server.
//!
//! Startup failures surface as [`Error`]; per-call failures stay inside the
//! tools domain and are rendered as text results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Cloudflare API client could not be created.
    #[error(transparent)]
    Api(#[from] crate::core::cloudflare::ApiError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
