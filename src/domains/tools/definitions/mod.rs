//! Tool definitions module.
//!
//! This module exports all available tool definitions, grouped by the
//! Cloudflare product they operate on. Each tool is defined in its own file.

pub mod cache;
pub mod dns;
pub mod kv;
pub mod zones;

pub use cache::{PurgeCacheParams, PurgeCacheTool};
pub use dns::{
    CreateDnsRecordParams, CreateDnsRecordTool, DeleteDnsRecordParams, DeleteDnsRecordTool,
    ListDnsRecordsParams, ListDnsRecordsTool, UpdateDnsRecordParams, UpdateDnsRecordTool,
};
pub use kv::{
    DeleteKvValueParams, DeleteKvValueTool, ListKvKeysParams, ListKvKeysTool,
    ListKvNamespacesParams, ListKvNamespacesTool, ReadKvValueParams, ReadKvValueTool,
    WriteKvValueParams, WriteKvValueTool,
};
pub use zones::{
    GetZoneAnalyticsParams, GetZoneAnalyticsTool, GetZoneParams, GetZoneTool, ListZonesParams,
    ListZonesTool,
};
