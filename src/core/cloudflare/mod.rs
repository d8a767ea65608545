//! Cloudflare API adapter.
//!
//! - `request` - description of an outbound call (method, path, query, body)
//! - `client` - the `reqwest` backed executor and the `CloudflareApi` seam
//! - `envelope` - the `{success, result, errors}` response wrapper
//! - `error` - API error types

mod client;
mod envelope;
mod error;
mod request;

pub use client::{CloudflareApi, CloudflareClient};
pub use envelope::{ApiEnvelope, ApiMessage};
pub use error::{ApiError, ApiResult};
pub use request::{ApiRequest, RequestBody, ResponseKind};

/// Base URL of the Cloudflare v4 API.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";
