//! Typed tool invocations.
//!
//! An incoming `(name, arguments)` pair is parsed into a [`ToolCall`] before
//! anything else happens, so malformed input is rejected at the boundary and
//! handlers only ever see validated parameters.

use serde_json::Value;

use super::definitions::*;
use super::error::ToolError;
use super::handlers::{CloudflareTool, ToolContext};
use crate::core::cloudflare::ApiRequest;

/// One validated invocation of a registered tool.
#[derive(Debug, Clone)]
pub enum ToolCall {
    ListZones(ListZonesParams),
    GetZone(GetZoneParams),
    ListDnsRecords(ListDnsRecordsParams),
    CreateDnsRecord(CreateDnsRecordParams),
    UpdateDnsRecord(UpdateDnsRecordParams),
    DeleteDnsRecord(DeleteDnsRecordParams),
    PurgeCache(PurgeCacheParams),
    ListKvNamespaces(ListKvNamespacesParams),
    ReadKvValue(ReadKvValueParams),
    WriteKvValue(WriteKvValueParams),
    DeleteKvValue(DeleteKvValueParams),
    ListKvKeys(ListKvKeysParams),
    GetZoneAnalytics(GetZoneAnalyticsParams),
}

impl ToolCall {
    /// Resolve the tool by exact name and validate its arguments.
    pub fn parse(name: &str, arguments: Value) -> Result<Self, ToolError> {
        let call = match name {
            ListZonesTool::NAME => Self::ListZones(ListZonesTool::parse_params(arguments)?),
            GetZoneTool::NAME => Self::GetZone(GetZoneTool::parse_params(arguments)?),
            ListDnsRecordsTool::NAME => {
                Self::ListDnsRecords(ListDnsRecordsTool::parse_params(arguments)?)
            }
            CreateDnsRecordTool::NAME => {
                Self::CreateDnsRecord(CreateDnsRecordTool::parse_params(arguments)?)
            }
            UpdateDnsRecordTool::NAME => {
                Self::UpdateDnsRecord(UpdateDnsRecordTool::parse_params(arguments)?)
            }
            DeleteDnsRecordTool::NAME => {
                Self::DeleteDnsRecord(DeleteDnsRecordTool::parse_params(arguments)?)
            }
            PurgeCacheTool::NAME => Self::PurgeCache(PurgeCacheTool::parse_params(arguments)?),
            ListKvNamespacesTool::NAME => {
                Self::ListKvNamespaces(ListKvNamespacesTool::parse_params(arguments)?)
            }
            ReadKvValueTool::NAME => Self::ReadKvValue(ReadKvValueTool::parse_params(arguments)?),
            WriteKvValueTool::NAME => {
                Self::WriteKvValue(WriteKvValueTool::parse_params(arguments)?)
            }
            DeleteKvValueTool::NAME => {
                Self::DeleteKvValue(DeleteKvValueTool::parse_params(arguments)?)
            }
            ListKvKeysTool::NAME => Self::ListKvKeys(ListKvKeysTool::parse_params(arguments)?),
            GetZoneAnalyticsTool::NAME => {
                Self::GetZoneAnalytics(GetZoneAnalyticsTool::parse_params(arguments)?)
            }
            _ => return Err(ToolError::unknown_tool(name)),
        };

        Ok(call)
    }

    /// Name of the tool this call targets.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListZones(_) => ListZonesTool::NAME,
            Self::GetZone(_) => GetZoneTool::NAME,
            Self::ListDnsRecords(_) => ListDnsRecordsTool::NAME,
            Self::CreateDnsRecord(_) => CreateDnsRecordTool::NAME,
            Self::UpdateDnsRecord(_) => UpdateDnsRecordTool::NAME,
            Self::DeleteDnsRecord(_) => DeleteDnsRecordTool::NAME,
            Self::PurgeCache(_) => PurgeCacheTool::NAME,
            Self::ListKvNamespaces(_) => ListKvNamespacesTool::NAME,
            Self::ReadKvValue(_) => ReadKvValueTool::NAME,
            Self::WriteKvValue(_) => WriteKvValueTool::NAME,
            Self::DeleteKvValue(_) => DeleteKvValueTool::NAME,
            Self::ListKvKeys(_) => ListKvKeysTool::NAME,
            Self::GetZoneAnalytics(_) => GetZoneAnalyticsTool::NAME,
        }
    }

    /// Translate the call into its outbound API request.
    pub fn into_request(self, ctx: &ToolContext) -> Result<ApiRequest, ToolError> {
        match self {
            Self::ListZones(p) => ListZonesTool::build_request(p, ctx),
            Self::GetZone(p) => GetZoneTool::build_request(p, ctx),
            Self::ListDnsRecords(p) => ListDnsRecordsTool::build_request(p, ctx),
            Self::CreateDnsRecord(p) => CreateDnsRecordTool::build_request(p, ctx),
            Self::UpdateDnsRecord(p) => UpdateDnsRecordTool::build_request(p, ctx),
            Self::DeleteDnsRecord(p) => DeleteDnsRecordTool::build_request(p, ctx),
            Self::PurgeCache(p) => PurgeCacheTool::build_request(p, ctx),
            Self::ListKvNamespaces(p) => ListKvNamespacesTool::build_request(p, ctx),
            Self::ReadKvValue(p) => ReadKvValueTool::build_request(p, ctx),
            Self::WriteKvValue(p) => WriteKvValueTool::build_request(p, ctx),
            Self::DeleteKvValue(p) => DeleteKvValueTool::build_request(p, ctx),
            Self::ListKvKeys(p) => ListKvKeysTool::build_request(p, ctx),
            Self::GetZoneAnalytics(p) => GetZoneAnalyticsTool::build_request(p, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_tool() {
        let call = ToolCall::parse("get_zone", json!({"zone_id": "z1"})).unwrap();
        assert!(matches!(call, ToolCall::GetZone(ref p) if p.zone_id == "z1"));
        assert_eq!(call.name(), "get_zone");
    }

    #[test]
    fn test_parse_unknown_tool() {
        let err = ToolCall::parse("drop_database", json!({})).unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref n) if n == "drop_database"));
        assert_eq!(err.to_string(), "Unknown tool: drop_database");
    }

    #[test]
    fn test_name_lookup_is_exact() {
        assert!(ToolCall::parse("List_Zones", json!({})).is_err());
        assert!(ToolCall::parse("list_zones ", json!({})).is_err());
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let err = ToolCall::parse("list_zones", json!(["zones"])).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_parse_then_build() {
        let call = ToolCall::parse(
            "create_dns_record",
            json!({"zone_id": "z1", "type": "TXT", "name": "_acme", "content": "token"}),
        )
        .unwrap();
        let request = call.into_request(&ToolContext::default()).unwrap();
        assert_eq!(request.path(), "/zones/z1/dns_records");
    }
}
