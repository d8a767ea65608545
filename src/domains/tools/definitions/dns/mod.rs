//! DNS record tools: list, create, update and delete records of a zone.

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::{CreateDnsRecordParams, CreateDnsRecordTool};
pub use delete::{DeleteDnsRecordParams, DeleteDnsRecordTool};
pub use list::{ListDnsRecordsParams, ListDnsRecordsTool};
pub use update::{UpdateDnsRecordParams, UpdateDnsRecordTool};

use serde::Serialize;

/// Body of the create and update record calls.
///
/// Optional fields are only serialized when the caller supplied them.
#[derive(Debug, Clone, Serialize)]
struct DnsRecordBody {
    #[serde(rename = "type")]
    record_type: String,
    name: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}
