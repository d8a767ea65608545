//! Delete KV value tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use super::value_path;
use crate::core::cloudflare::{ApiRequest, ResponseKind};
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the delete KV value tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteKvValueParams {
    /// Account ID (uses default from config if not provided)
    pub account_id: Option<String>,

    /// The KV namespace ID
    pub namespace_id: String,

    /// The key to delete
    pub key: String,
}

/// Delete KV value tool.
pub struct DeleteKvValueTool;

impl DeleteKvValueTool {
    /// Result reported once the key is removed.
    pub const SUCCESS_MESSAGE: &'static str = "KV value deleted successfully";
}

impl CloudflareTool for DeleteKvValueTool {
    const NAME: &'static str = "delete_kv_value";

    const DESCRIPTION: &'static str = "Delete a key from Workers KV storage";

    type Params = DeleteKvValueParams;

    fn build_request(
        params: DeleteKvValueParams,
        ctx: &ToolContext,
    ) -> Result<ApiRequest, ToolError> {
        let account_id = ctx.resolve_account_id(params.account_id.as_deref())?;

        Ok(
            ApiRequest::delete(value_path(&account_id, &params.namespace_id, &params.key))
                .expect(ResponseKind::Acknowledge(Self::SUCCESS_MESSAGE)),
        )
    }
}
