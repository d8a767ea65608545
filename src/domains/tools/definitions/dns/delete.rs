//! Delete DNS record tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the delete DNS record tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDnsRecordParams {
    /// The zone ID
    pub zone_id: String,

    /// The DNS record ID to delete
    pub record_id: String,
}

/// Delete DNS record tool.
pub struct DeleteDnsRecordTool;

impl CloudflareTool for DeleteDnsRecordTool {
    const NAME: &'static str = "delete_dns_record";

    const DESCRIPTION: &'static str = "Delete a DNS record from a zone";

    type Params = DeleteDnsRecordParams;

    fn build_request(
        params: DeleteDnsRecordParams,
        _ctx: &ToolContext,
    ) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::delete([
            "zones",
            params.zone_id.as_str(),
            "dns_records",
            params.record_id.as_str(),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cloudflare::RequestBody;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_delete_record_request() {
        let params =
            DeleteDnsRecordTool::parse_params(json!({"zone_id": "z1", "record_id": "r1"})).unwrap();
        let request = DeleteDnsRecordTool::build_request(params, &ToolContext::default()).unwrap();

        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path(), "/zones/z1/dns_records/r1");
        assert_eq!(request.body, RequestBody::Empty);
    }
}
