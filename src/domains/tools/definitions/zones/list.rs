//! List zones tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the list zones tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListZonesParams {
    /// Filter zones by name (optional)
    pub name: Option<String>,

    /// Filter by status: active, pending, initializing, moved, deleted, deactivated (optional)
    pub status: Option<String>,

    /// Page number for pagination (default: 1)
    pub page: Option<u32>,

    /// Number of zones per page (default: 20, max: 50)
    pub per_page: Option<u32>,
}

/// List zones tool - lists the zones (domains) of the account.
pub struct ListZonesTool;

impl CloudflareTool for ListZonesTool {
    const NAME: &'static str = "list_zones";

    const DESCRIPTION: &'static str = "List all zones (domains) in the Cloudflare account. Returns zone details including ID, name, status, and nameservers.";

    type Params = ListZonesParams;

    fn build_request(params: ListZonesParams, _ctx: &ToolContext) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get(["zones"])
            .query_opt("name", params.name)
            .query_opt("status", params.status)
            .query_opt("page", params.page)
            .query_opt("per_page", params.per_page))
    }
}
