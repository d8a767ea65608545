//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the Cloudflare API adapter,
//! server lifecycle management, and transport layer abstractions.

pub mod cloudflare;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use cloudflare::{CloudflareApi, CloudflareClient};
pub use config::{Config, LoggingConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
