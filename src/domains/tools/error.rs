//! Tool-specific error types.

use thiserror::Error;

use crate::core::cloudflare::ApiError;

/// Errors that can occur during tool operations.
///
/// Every variant is rendered to the client as `Error: <message>`.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Required configuration is missing for this call.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Cloudflare API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request body could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The account id could be resolved neither from the call nor from config.
    pub fn missing_account_id() -> Self {
        Self::config("Account ID is required. Provide it in args or config.")
    }
}
