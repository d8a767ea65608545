//! Tool handler building blocks.
//!
//! Every Cloudflare tool implements [`CloudflareTool`]: it declares its name,
//! description and typed parameters, and turns validated parameters into an
//! [`ApiRequest`]. Executing the request is left to the registry, so building
//! a request never touches the network.

use rmcp::{handler::server::tool::schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ToolError;
use crate::core::cloudflare::ApiRequest;
use crate::core::config::Config;

/// Per-process data threaded into every handler.
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    default_account_id: Option<String>,
}

impl ToolContext {
    /// Create a context with an optional default account id.
    pub fn new(default_account_id: Option<String>) -> Self {
        Self {
            default_account_id: default_account_id.filter(|id| !id.is_empty()),
        }
    }

    /// Build the context from the server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.credentials.account_id.clone())
    }

    /// The account used when a call does not name one.
    pub fn default_account_id(&self) -> Option<&str> {
        self.default_account_id.as_deref()
    }

    /// Pick the account for a call: a non-empty explicit argument wins over
    /// the configured default.
    pub fn resolve_account_id(&self, explicit: Option<&str>) -> Result<String, ToolError> {
        explicit
            .filter(|id| !id.is_empty())
            .or(self.default_account_id())
            .map(str::to_string)
            .ok_or_else(ToolError::missing_account_id)
    }
}

/// A tool backed by a single Cloudflare API call.
pub trait CloudflareTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments; their JSON schema is the tool's input schema.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Translate validated arguments into the outbound request.
    fn build_request(params: Self::Params, ctx: &ToolContext) -> Result<ApiRequest, ToolError>;

    /// Validate raw arguments against the parameter type.
    ///
    /// A missing argument object is treated as `{}`.
    fn parse_params(arguments: Value) -> Result<Self::Params, ToolError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Default::default()),
            Value::Object(map) => Value::Object(map),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "expected an object, got {}",
                    other
                )));
            }
        };

        serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", Self::NAME, e)))
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
