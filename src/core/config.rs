//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::cloudflare::CLOUDFLARE_API_BASE;
use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default timeout applied to every Cloudflare API call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Cloudflare credentials.
    pub credentials: CredentialsConfig,

    /// Cloudflare API endpoint configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Cloudflare credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// API token sent as a bearer token on every request.
    #[serde(skip_serializing, default)]
    pub api_token: String,

    /// Account used by the Workers KV tools when a call does not name one.
    pub account_id: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_token", &"[REDACTED]")
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// Cloudflare API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all request paths are resolved against.
    pub base_url: String,

    /// Overall timeout for a single request, in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: CLOUDFLARE_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "cloudflare-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a configuration with default values and the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.credentials.api_token = api_token.into();
        config
    }

    /// Set the default account id.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.credentials.account_id = Some(account_id.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `CLOUDFLARE_API_TOKEN` is required; everything else has a default.
    /// Server settings use the `MCP_` prefix, e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        config.credentials.api_token = non_empty_var("CLOUDFLARE_API_TOKEN").ok_or_else(|| {
            Error::config("CLOUDFLARE_API_TOKEN environment variable is required")
        })?;

        if let Some(account_id) = non_empty_var("CLOUDFLARE_ACCOUNT_ID") {
            info!("Default account id loaded from environment");
            config.credentials.account_id = Some(account_id);
        } else {
            warn!(
                "CLOUDFLARE_ACCOUNT_ID not set - Workers KV tools will require an \
                 explicit account_id argument"
            );
        }

        if let Some(base_url) = non_empty_var("CLOUDFLARE_API_BASE") {
            info!("Using Cloudflare API base URL: {}", base_url);
            config.api.base_url = base_url;
        }

        if let Some(timeout) = non_empty_var("CLOUDFLARE_API_TIMEOUT_SECS") {
            config.api.timeout_secs = timeout.parse().map_err(|_| {
                Error::config(format!(
                    "CLOUDFLARE_API_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
