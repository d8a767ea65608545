//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! [`ToolRegistry`].
//!
//! Tool calls never surface as protocol errors: unknown tools, invalid
//! arguments and API failures all come back as an `Error: ...` text result.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::cloudflare::{CloudflareApi, CloudflareClient};
use super::config::Config;
use super::error::Result;
use crate::domains::tools::{ToolContext, ToolRegistry};

pub(crate) const INSTRUCTIONS: &str = "Cloudflare API tools: zones, DNS records, cache purge, Workers KV \
    and zone analytics. Results are returned as JSON text; failures start with 'Error:'.";

/// The main MCP server handler.
///
/// Cloning is cheap: clones share the configuration, the registry and the
/// underlying HTTP client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool registry and dispatcher.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server talking to the Cloudflare API.
    pub fn new(config: Config) -> Result<Self> {
        let client = CloudflareClient::new(&config.api, config.credentials.api_token.clone())?;
        info!("Cloudflare API client ready ({})", client.base_url());
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a server on top of an arbitrary API backend.
    pub fn with_api(config: Config, api: Arc<dyn CloudflareApi>) -> Self {
        let context = ToolContext::from_config(&config);

        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(context, api)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> CallToolResult {
        self.registry.call_tool(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        Ok(self.registry.call_tool(&request.name, arguments).await)
    }
}
