//! Update DNS record tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use super::DnsRecordBody;
use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the update DNS record tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateDnsRecordParams {
    /// The zone ID
    pub zone_id: String,

    /// The DNS record ID to update
    pub record_id: String,

    /// DNS record type
    #[serde(rename = "type")]
    pub record_type: String,

    /// DNS record name
    pub name: String,

    /// DNS record content
    pub content: String,

    /// Time to live
    pub ttl: Option<u32>,

    /// Whether the record is proxied through Cloudflare
    pub proxied: Option<bool>,

    /// Priority (for MX, SRV records)
    pub priority: Option<u16>,

    /// Comment for the DNS record
    pub comment: Option<String>,
}

/// Update DNS record tool.
///
/// Sends a full `PUT`; optional fields left out by the caller are left out of
/// the body too, and the API decides what that means for the stored record.
pub struct UpdateDnsRecordTool;

impl CloudflareTool for UpdateDnsRecordTool {
    const NAME: &'static str = "update_dns_record";

    const DESCRIPTION: &'static str = "Update an existing DNS record. Can modify type, name, content, TTL, proxy status, etc.";

    type Params = UpdateDnsRecordParams;

    fn build_request(
        params: UpdateDnsRecordParams,
        _ctx: &ToolContext,
    ) -> Result<ApiRequest, ToolError> {
        let body = DnsRecordBody {
            record_type: params.record_type,
            name: params.name,
            content: params.content,
            ttl: params.ttl,
            proxied: params.proxied,
            priority: params.priority,
            comment: params.comment,
        };

        let segments = [
            "zones",
            params.zone_id.as_str(),
            "dns_records",
            params.record_id.as_str(),
        ];
        Ok(ApiRequest::put(segments).json(&body)?)
    }
}
