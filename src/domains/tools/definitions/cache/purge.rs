//! Purge cache tool definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::cloudflare::ApiRequest;
use crate::domains::tools::{CloudflareTool, ToolContext, ToolError};

/// Parameters for the purge cache tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PurgeCacheParams {
    /// The zone ID
    pub zone_id: String,

    /// Purge all cached content (use cautiously!)
    pub purge_everything: Option<bool>,

    /// Array of URLs to purge
    pub files: Option<Vec<String>>,

    /// Array of cache tags to purge
    pub tags: Option<Vec<String>>,

    /// Array of hosts to purge
    pub hosts: Option<Vec<String>>,
}

#[derive(Debug, Default, Serialize)]
struct PurgeBody {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    purge_everything: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hosts: Option<Vec<String>>,
}

impl From<PurgeCacheParams> for PurgeBody {
    fn from(params: PurgeCacheParams) -> Self {
        // "Everything" is exclusive with the granular selectors.
        if params.purge_everything == Some(true) {
            return Self {
                purge_everything: true,
                ..Default::default()
            };
        }

        Self {
            purge_everything: false,
            files: params.files,
            tags: params.tags,
            hosts: params.hosts,
        }
    }
}

/// Purge cache tool - purges everything or selected files/tags/hosts.
pub struct PurgeCacheTool;

impl CloudflareTool for PurgeCacheTool {
    const NAME: &'static str = "purge_cache";

    const DESCRIPTION: &'static str = "Purge Cloudflare's cache for a zone. Can purge everything or specific files/tags/hosts.";

    type Params = PurgeCacheParams;

    fn build_request(params: PurgeCacheParams, _ctx: &ToolContext) -> Result<ApiRequest, ToolError> {
        let zone_id = params.zone_id.clone();
        let body = PurgeBody::from(params);

        Ok(ApiRequest::post(["zones", zone_id.as_str(), "purge_cache"]).json(&body)?)
    }
}
