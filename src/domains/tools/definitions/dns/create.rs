//! Create DNS record tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use super::DnsRecordBody;
use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// TTL value meaning "automatic".
const AUTOMATIC_TTL: u32 = 1;

/// Parameters for the create DNS record tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDnsRecordParams {
    /// The zone ID
    pub zone_id: String,

    /// DNS record type (A, AAAA, CNAME, TXT, MX, etc.)
    #[serde(rename = "type")]
    pub record_type: String,

    /// DNS record name (e.g., 'www' or '@' for root)
    pub name: String,

    /// DNS record content (e.g., IP address, hostname)
    pub content: String,

    /// Time to live (1 = automatic, or 120-86400 seconds). Defaults to 1
    pub ttl: Option<u32>,

    /// Whether the record is proxied through Cloudflare (only for A, AAAA, CNAME)
    pub proxied: Option<bool>,

    /// Priority (for MX, SRV records)
    pub priority: Option<u16>,

    /// Comment for the DNS record
    pub comment: Option<String>,
}

/// Create DNS record tool.
pub struct CreateDnsRecordTool;

impl CloudflareTool for CreateDnsRecordTool {
    const NAME: &'static str = "create_dns_record";

    const DESCRIPTION: &'static str = "Create a new DNS record in a zone. Supports all DNS record types.";

    type Params = CreateDnsRecordParams;

    fn build_request(
        params: CreateDnsRecordParams,
        _ctx: &ToolContext,
    ) -> Result<ApiRequest, ToolError> {
        let body = DnsRecordBody {
            record_type: params.record_type,
            name: params.name,
            content: params.content,
            ttl: Some(params.ttl.unwrap_or(AUTOMATIC_TTL)),
            proxied: params.proxied,
            priority: params.priority,
            comment: params.comment,
        };

        Ok(ApiRequest::post(["zones", params.zone_id.as_str(), "dns_records"]).json(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_required_fields_only() {
        let params = CreateDnsRecordTool::parse_params(json!({
            "zone_id": "z1",
            "type": "A",
            "name": "www",
            "content": "192.0.2.1"
        }))
        .unwrap();
        let request = CreateDnsRecordTool::build_request(params, &ToolContext::default()).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "/zones/z1/dns_records");
        assert_eq!(
            request.json_body(),
            Some(&json!({
                "type": "A",
                "name": "www",
                "content": "192.0.2.1",
                "ttl": 1
            }))
        );
    }

    #[test]
    fn test_optional_fields_included_when_given() {
        let params = CreateDnsRecordTool::parse_params(json!({
            "zone_id": "z1",
            "type": "MX",
            "name": "@",
            "content": "mail.example.com",
            "ttl": 3600,
            "proxied": false,
            "priority": 10,
            "comment": "primary mx"
        }))
        .unwrap();
        let request = CreateDnsRecordTool::build_request(params, &ToolContext::default()).unwrap();

        assert_eq!(
            request.json_body(),
            Some(&json!({
                "type": "MX",
                "name": "@",
                "content": "mail.example.com",
                "ttl": 3600,
                "proxied": false,
                "priority": 10,
                "comment": "primary mx"
            }))
        );
    }

    #[test]
    fn test_null_ttl_means_automatic() {
        let params = CreateDnsRecordTool::parse_params(json!({
            "zone_id": "z1",
            "type": "CNAME",
            "name": "blog",
            "content": "example.com",
            "ttl": null,
            "proxied": null
        }))
        .unwrap();
        let request = CreateDnsRecordTool::build_request(params, &ToolContext::default()).unwrap();

        assert_eq!(
            request.json_body(),
            Some(&json!({
                "type": "CNAME",
                "name": "blog",
                "content": "example.com",
                "ttl": 1
            }))
        );
    }

    #[test]
    fn test_missing_content_rejected() {
        let err = CreateDnsRecordTool::parse_params(json!({
            "zone_id": "z1",
            "type": "A",
            "name": "www"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("content"));
    }
}
