//! Read KV value tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use super::value_path;
use crate::core::cloudflare::{ApiRequest, ResponseKind};
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the read KV value tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadKvValueParams {
    /// Account ID (uses default from config if not provided)
    pub account_id: Option<String>,

    /// The KV namespace ID
    pub namespace_id: String,

    /// The key to read
    pub key: String,
}

/// Read KV value tool.
///
/// The values endpoint returns the stored bytes, not a JSON envelope.
pub struct ReadKvValueTool;

impl CloudflareTool for ReadKvValueTool {
    const NAME: &'static str = "read_kv_value";

    const DESCRIPTION: &'static str = "Read a value from Workers KV storage by key. Returns the stored value.";

    type Params = ReadKvValueParams;

    fn build_request(params: ReadKvValueParams, ctx: &ToolContext) -> Result<ApiRequest, ToolError> {
        let account_id = ctx.resolve_account_id(params.account_id.as_deref())?;

        Ok(
            ApiRequest::get(value_path(&account_id, &params.namespace_id, &params.key))
                .expect(ResponseKind::RawText),
        )
    }
}
