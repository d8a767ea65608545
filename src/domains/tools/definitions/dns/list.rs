//! List DNS records tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the list DNS records tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListDnsRecordsParams {
    /// The zone ID
    pub zone_id: String,

    /// DNS record type (A, AAAA, CNAME, TXT, MX, etc.)
    #[serde(rename = "type")]
    pub record_type: Option<String>,

    /// DNS record name to filter by
    pub name: Option<String>,

    /// DNS record content to filter by
    pub content: Option<String>,

    /// Page number for pagination
    pub page: Option<u32>,

    /// Number of records per page (max: 100)
    pub per_page: Option<u32>,
}

/// List DNS records tool - lists and filters the records of a zone.
pub struct ListDnsRecordsTool;

impl CloudflareTool for ListDnsRecordsTool {
    const NAME: &'static str = "list_dns_records";

    const DESCRIPTION: &'static str = "List DNS records for a zone. Can filter by type, name, content, etc.";

    type Params = ListDnsRecordsParams;

    fn build_request(
        params: ListDnsRecordsParams,
        _ctx: &ToolContext,
    ) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get(["zones", params.zone_id.as_str(), "dns_records"])
            .query_opt("type", params.record_type)
            .query_opt("name", params.name)
            .query_opt("content", params.content)
            .query_opt("page", params.page)
            .query_opt("per_page", params.per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_records_filters() {
        let params = ListDnsRecordsTool::parse_params(json!({
            "zone_id": "z1",
            "type": "CNAME",
            "page": 2
        }))
        .unwrap();
        let request = ListDnsRecordsTool::build_request(params, &ToolContext::default()).unwrap();

        assert_eq!(request.path(), "/zones/z1/dns_records");
        assert_eq!(
            request.query,
            vec![
                ("type".to_string(), "CNAME".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }
}
