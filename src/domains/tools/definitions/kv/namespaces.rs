//! List KV namespaces tool definition.

use schemars::JsonSchema;
use serde::Deserialize;

use super::namespaces_path;
use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the list KV namespaces tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListKvNamespacesParams {
    /// Account ID (uses default from config if not provided)
    pub account_id: Option<String>,

    /// Page number for pagination
    pub page: Option<u32>,

    /// Number of namespaces per page
    pub per_page: Option<u32>,
}

/// List KV namespaces tool.
pub struct ListKvNamespacesTool;

impl CloudflareTool for ListKvNamespacesTool {
    const NAME: &'static str = "list_kv_namespaces";

    const DESCRIPTION: &'static str = "List all Workers KV namespaces in the account. KV is Cloudflare's key-value storage.";

    type Params = ListKvNamespacesParams;

    fn build_request(
        params: ListKvNamespacesParams,
        ctx: &ToolContext,
    ) -> Result<ApiRequest, ToolError> {
        let account_id = ctx.resolve_account_id(params.account_id.as_deref())?;

        Ok(ApiRequest::get(namespaces_path(&account_id))
            .query_opt("page", params.page)
            .query_opt("per_page", params.per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uses_default_account() {
        let ctx = ToolContext::new(Some("acct".to_string()));
        let params = ListKvNamespacesTool::parse_params(json!({"per_page": 10})).unwrap();
        let request = ListKvNamespacesTool::build_request(params, &ctx).unwrap();

        assert_eq!(request.path(), "/accounts/acct/storage/kv/namespaces");
        assert_eq!(request.query_value("per_page"), Some("10"));
    }

    #[test]
    fn test_without_account() {
        let params = ListKvNamespacesTool::parse_params(json!({})).unwrap();
        let err = ListKvNamespacesTool::build_request(params, &ToolContext::default()).unwrap_err();
        assert!(matches!(err, ToolError::Config(_)));
    }
}
