//! Write KV value tool definition.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::value_path;
use crate::core::cloudflare::{ApiRequest, ResponseKind};
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the write KV value tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WriteKvValueParams {
    /// Account ID (uses default from config if not provided)
    pub account_id: Option<String>,

    /// The KV namespace ID
    pub namespace_id: String,

    /// The key to write
    pub key: String,

    /// The value to store
    pub value: String,

    /// Number of seconds for the key to expire
    pub expiration_ttl: Option<u64>,

    /// Arbitrary JSON metadata to store with the key
    pub metadata: Option<Map<String, Value>>,
}

/// Write KV value tool.
pub struct WriteKvValueTool;

impl WriteKvValueTool {
    /// Result reported once the value is stored.
    pub const SUCCESS_MESSAGE: &'static str = "KV value written successfully";
}

impl CloudflareTool for WriteKvValueTool {
    const NAME: &'static str = "write_kv_value";

    const DESCRIPTION: &'static str = "Write a key-value pair to Workers KV storage. Can store text or metadata.";

    type Params = WriteKvValueParams;

    fn build_request(params: WriteKvValueParams, ctx: &ToolContext) -> Result<ApiRequest, ToolError> {
        let account_id = ctx.resolve_account_id(params.account_id.as_deref())?;

        let metadata = params
            .metadata
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        Ok(
            ApiRequest::put(value_path(&account_id, &params.namespace_id, &params.key))
                .query_opt("expiration_ttl", params.expiration_ttl)
                .query_opt("metadata", metadata)
                .text(params.value)
                .expect(ResponseKind::Acknowledge(Self::SUCCESS_MESSAGE)),
        )
    }
}
