//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool wraps one Cloudflare API call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `CloudflareTool` trait and the per-process `ToolContext`
//! - `call.rs` - `ToolCall`, the validated form of an incoming invocation
//! - `registry.rs` - Central tool registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a params struct and a
//!    `CloudflareTool` implementation
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a variant to `ToolCall` in `call.rs`
//! 4. List it in `ToolRegistry::tool_names()` and `ToolRegistry::get_all_tools()`

mod call;
pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use call::ToolCall;
pub use error::ToolError;
pub use handlers::{CloudflareTool, ToolContext};
pub use registry::ToolRegistry;
