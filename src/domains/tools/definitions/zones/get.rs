//! Get zone tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the get zone tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetZoneParams {
    /// The zone ID
    pub zone_id: String,
}

/// Get zone tool - fetches the details of a single zone.
pub struct GetZoneTool;

impl CloudflareTool for GetZoneTool {
    const NAME: &'static str = "get_zone";

    const DESCRIPTION: &'static str = "Get detailed information about a specific zone by zone ID";

    type Params = GetZoneParams;

    fn build_request(params: GetZoneParams, _ctx: &ToolContext) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get(["zones", params.zone_id.as_str()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_zone_path() {
        let params = GetZoneTool::parse_params(json!({"zone_id": "023e105f4ecef8ad9ca31a8372d0c353"})).unwrap();
        let request = GetZoneTool::build_request(params, &ToolContext::default()).unwrap();
        assert_eq!(request.path(), "/zones/023e105f4ecef8ad9ca31a8372d0c353");
    }

    #[test]
    fn test_get_zone_requires_zone_id() {
        let err = GetZoneTool::parse_params(json!({})).unwrap_err();
        assert!(err.to_string().contains("zone_id"));
    }
}
