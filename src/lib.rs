//! Cloudflare MCP Server
//!
//! A Model Context Protocol server that exposes the Cloudflare v4 REST API as
//! a fixed set of tools: zones, DNS records, cache purge, Workers KV and zone
//! analytics.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the Cloudflare API client, the MCP
//!   server handler and transports
//! - **domains**: business logic
//!   - **tools**: one typed definition per tool plus the registry that
//!     dispatches calls by name
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudflare_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
