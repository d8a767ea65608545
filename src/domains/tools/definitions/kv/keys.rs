//! List KV keys tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use super::namespaces_path;
use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the list KV keys tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListKvKeysParams {
    /// Account ID (uses default from config if not provided)
    pub account_id: Option<String>,

    /// The KV namespace ID
    pub namespace_id: String,

    /// Filter keys by prefix
    pub prefix: Option<String>,

    /// Maximum number of keys to return (default: 1000)
    pub limit: Option<u32>,

    /// Cursor for pagination
    pub cursor: Option<String>,
}

/// List KV keys tool.
pub struct ListKvKeysTool;

impl CloudflareTool for ListKvKeysTool {
    const NAME: &'static str = "list_kv_keys";

    const DESCRIPTION: &'static str = "List all keys in a Workers KV namespace. Supports pagination and prefix filtering.";

    type Params = ListKvKeysParams;

    fn build_request(params: ListKvKeysParams, ctx: &ToolContext) -> Result<ApiRequest, ToolError> {
        let account_id = ctx.resolve_account_id(params.account_id.as_deref())?;

        let mut path = namespaces_path(&account_id);
        path.extend([params.namespace_id, "keys".to_string()]);

        Ok(ApiRequest::get(path)
            .query_opt("prefix", params.prefix)
            .query_opt("limit", params.limit)
            .query_opt("cursor", params.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_keys_with_prefix() {
        let ctx = ToolContext::new(Some("a1".to_string()));
        let params = ListKvKeysTool::parse_params(json!({
            "namespace_id": "ns",
            "prefix": "user:",
            "limit": 100
        }))
        .unwrap();
        let request = ListKvKeysTool::build_request(params, &ctx).unwrap();

        assert_eq!(request.path(), "/accounts/a1/storage/kv/namespaces/ns/keys");
        assert_eq!(request.query_value("prefix"), Some("user:"));
        assert_eq!(request.query_value("limit"), Some("100"));
        assert_eq!(request.query_value("cursor"), None);
    }
}
