//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The ordered list of tool descriptors served by `tools/list`
//! - The dispatcher behind `tools/call`, which never fails at the protocol
//!   level: every outcome is a single text block

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::call::ToolCall;
use super::definitions::*;
use super::error::ToolError;
use super::handlers::{CloudflareTool, ToolContext};
use crate::core::cloudflare::CloudflareApi;

/// Tool registry - owns the API backend and the per-process tool context.
pub struct ToolRegistry {
    context: ToolContext,
    api: Arc<dyn CloudflareApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: ToolContext, api: Arc<dyn CloudflareApi>) -> Self {
        Self { context, api }
    }

    /// Get all tool names, in registry order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListZonesTool::NAME,
            GetZoneTool::NAME,
            ListDnsRecordsTool::NAME,
            CreateDnsRecordTool::NAME,
            UpdateDnsRecordTool::NAME,
            DeleteDnsRecordTool::NAME,
            PurgeCacheTool::NAME,
            ListKvNamespacesTool::NAME,
            ReadKvValueTool::NAME,
            WriteKvValueTool::NAME,
            DeleteKvValueTool::NAME,
            ListKvKeysTool::NAME,
            GetZoneAnalyticsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListZonesTool::to_tool(),
            GetZoneTool::to_tool(),
            ListDnsRecordsTool::to_tool(),
            CreateDnsRecordTool::to_tool(),
            UpdateDnsRecordTool::to_tool(),
            DeleteDnsRecordTool::to_tool(),
            PurgeCacheTool::to_tool(),
            ListKvNamespacesTool::to_tool(),
            ReadKvValueTool::to_tool(),
            WriteKvValueTool::to_tool(),
            DeleteKvValueTool::to_tool(),
            ListKvKeysTool::to_tool(),
            GetZoneAnalyticsTool::to_tool(),
        ]
    }

    /// Run a tool and return its unwrapped result.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let call = ToolCall::parse(name, arguments)?;
        let request = call.into_request(&self.context)?;

        debug!("{} -> {} {}", name, request.method, request.path());

        Ok(self.api.execute(request).await?)
    }

    /// Dispatch a tool call and render the outcome as text.
    ///
    /// Success is the pretty-printed JSON result; any failure becomes
    /// `Error: <message>`.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Value) -> CallToolResult {
        let text = match self.dispatch(name, arguments).await {
            Ok(result) => {
                info!("Tool {} succeeded", name);
                serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string())
            }
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                format!("Error: {}", e)
            }
        };

        CallToolResult::success(vec![Content::text(text)])
    }
}
