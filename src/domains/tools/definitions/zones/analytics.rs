//! Zone analytics tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the zone analytics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetZoneAnalyticsParams {
    /// The zone ID
    pub zone_id: String,

    /// Start time (ISO 8601 format or relative like '-1440' for last 24h)
    pub since: Option<String>,

    /// End time (ISO 8601 format or relative like '-0')
    pub until: Option<String>,
}

/// Zone analytics tool - fetches the analytics dashboard of a zone.
pub struct GetZoneAnalyticsTool;

impl CloudflareTool for GetZoneAnalyticsTool {
    const NAME: &'static str = "get_zone_analytics";

    const DESCRIPTION: &'static str = "Get analytics data for a zone including requests, bandwidth, threats, and pageviews.";

    type Params = GetZoneAnalyticsParams;

    fn build_request(
        params: GetZoneAnalyticsParams,
        _ctx: &ToolContext,
    ) -> Result<ApiRequest, ToolError> {
        Ok(
            ApiRequest::get(["zones", params.zone_id.as_str(), "analytics", "dashboard"])
                .query_opt("since", params.since)
                .query_opt("until", params.until),
        )
    }
}
