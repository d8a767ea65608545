//! The `{success, result, errors}` wrapper returned by every JSON endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ApiError;

/// Response envelope of the Cloudflare v4 API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,

    #[serde(default)]
    pub result: Value,

    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

/// A single entry of the envelope's `errors` list.
///
/// Unknown fields (`error_chain`, `documentation_url`, ...) are kept so the
/// serialized list matches what the API sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,

    #[serde(default)]
    pub message: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiEnvelope {
    /// Serialize the error list the way it is reported to callers.
    pub fn errors_json(&self) -> String {
        serde_json::to_string(&self.errors).unwrap_or_else(|_| "[]".to_string())
    }

    /// Unwrap the envelope into its `result`, failing on `success: false`.
    pub fn into_result(self) -> Result<Value, ApiError> {
        if self.success {
            Ok(self.result)
        } else {
            Err(ApiError::Envelope(self.errors_json()))
        }
    }
}
