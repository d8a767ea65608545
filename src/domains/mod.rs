//! Domain modules containing business logic organized by bounded contexts.
//!
//! - **tools**: Cloudflare operations exposed as MCP tools

pub mod tools;
