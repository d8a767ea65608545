//! HTTP client for the Cloudflare v4 API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::envelope::ApiEnvelope;
use super::error::{ApiError, ApiResult};
use super::request::{ApiRequest, RequestBody, ResponseKind};
use crate::core::config::ApiConfig;

/// Backend that executes [`ApiRequest`]s.
///
/// [`CloudflareClient`] is the production implementation; tests plug in
/// in-memory stubs.
#[async_trait]
pub trait CloudflareApi: Send + Sync {
    /// Execute a request and return the unwrapped result.
    async fn execute(&self, request: ApiRequest) -> ApiResult<Value>;
}

/// Cloudflare API client.
///
/// Holds the single `reqwest::Client` shared by every tool for the lifetime
/// of the process.
pub struct CloudflareClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl CloudflareClient {
    /// Create a new client with the configured base URL and timeout.
    pub fn new(config: &ApiConfig, api_token: impl Into<String>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_token: api_token.into(),
        })
    }

    /// The API base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for CloudflareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareClient")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl CloudflareApi for CloudflareClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path()))]
    async fn execute(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = request.url(&self.base_url)?;
        let ApiRequest {
            method,
            body,
            response: kind,
            ..
        } = request;

        debug!("Sending Cloudflare API request");

        let builder = self
            .http
            .request(method, url)
            .bearer_auth(&self.api_token);

        let builder = match body {
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Text(text) => builder.header(CONTENT_TYPE, "text/plain").body(text),
            RequestBody::Empty if kind == ResponseKind::Envelope => {
                builder.header(CONTENT_TYPE, "application/json")
            }
            RequestBody::Empty => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Cloudflare API request failed with status {}", status);
            return Err(ApiError::status(status, failure_detail(&text)));
        }

        debug!("Cloudflare API request succeeded with status {}", status);

        match kind {
            ResponseKind::Envelope => {
                let envelope: ApiEnvelope = serde_json::from_str(&text)
                    .map_err(|e| ApiError::decode(e.to_string()))?;
                envelope.into_result()
            }
            ResponseKind::RawText => Ok(Value::String(text)),
            ResponseKind::Acknowledge(message) => Ok(Value::String(message.to_string())),
        }
    }
}

/// Describe a failed response: the envelope's error list when there is one,
/// otherwise the raw body.
fn failure_detail(body: &str) -> String {
    match serde_json::from_str::<ApiEnvelope>(body) {
        Ok(envelope) if !envelope.errors.is_empty() => envelope.errors_json(),
        _ if body.trim().is_empty() => "<empty body>".to_string(),
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    const TOKEN: &str = "test-token";

    fn client_for(server: &mockito::ServerGuard) -> CloudflareClient {
        let config = ApiConfig {
            base_url: format!("{}/client/v4", server.url()),
            timeout_secs: 5,
        };
        CloudflareClient::new(&config, TOKEN).unwrap()
    }

    #[tokio::test]
    async fn test_envelope_result_with_auth_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/client/v4/zones/z1")
            .match_header("authorization", "Bearer test-token")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "errors": [], "result": {"id": "z1", "name": "example.com"}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.execute(ApiRequest::get(["zones", "z1"])).await.unwrap();

        assert_eq!(result, json!({"id": "z1", "name": "example.com"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/client/v4/zones")
            .with_status(200)
            .with_body(r#"{"success": false, "errors": [{"code": 1000, "message": "bad"}], "result": null}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.execute(ApiRequest::get(["zones"])).await.unwrap_err();

        assert!(matches!(err, ApiError::Envelope(_)));
        assert!(err.to_string().contains("bad"));
    }

    #[tokio::test]
    async fn test_error_status_reports_envelope_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/client/v4/zones/z1/dns_records/r1")
            .with_status(403)
            .with_body(r#"{"success": false, "errors": [{"code": 10000, "message": "Authentication error"}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .execute(ApiRequest::delete(["zones", "z1", "dns_records", "r1"]))
            .await
            .unwrap_err();

        match &err {
            ApiError::Status { status, detail } => {
                assert_eq!(status.as_u16(), 403);
                assert!(detail.contains("Authentication error"));
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_with_plain_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/client/v4/zones")
            .with_status(502)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.execute(ApiRequest::get(["zones"])).await.unwrap_err();
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_json_body_is_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/client/v4/zones/z1/purge_cache")
            .match_body(Matcher::Json(json!({"purge_everything": true})))
            .with_status(200)
            .with_body(r#"{"success": true, "errors": [], "result": {"id": "z1"}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let request = ApiRequest::post(["zones", "z1", "purge_cache"])
            .json(&json!({"purge_everything": true}))
            .unwrap();
        client.execute(request).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_raw_text_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/client/v4/accounts/a1/storage/kv/namespaces/ns/values/greeting")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/octet-stream")
            .with_body("hello world")
            .create_async()
            .await;

        let client = client_for(&server);
        let request = ApiRequest::get([
            "accounts", "a1", "storage", "kv", "namespaces", "ns", "values", "greeting",
        ])
        .expect(ResponseKind::RawText);

        let result = client.execute(request).await.unwrap();
        assert_eq!(result, Value::String("hello world".to_string()));
    }

    #[tokio::test]
    async fn test_text_body_with_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/client/v4/accounts/a1/storage/kv/namespaces/ns/values/k")
            .match_query(Matcher::UrlEncoded("expiration_ttl".into(), "60".into()))
            .match_header("content-type", "text/plain")
            .match_body("v")
            .with_status(200)
            .with_body(r#"{"success": true, "errors": [], "result": null}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let request = ApiRequest::put([
            "accounts", "a1", "storage", "kv", "namespaces", "ns", "values", "k",
        ])
        .query("expiration_ttl", 60)
        .text("v")
        .expect(ResponseKind::Acknowledge("written"));

        let result = client.execute(request).await.unwrap();
        assert_eq!(result, Value::String("written".to_string()));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/client/v4/zones")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.execute(ApiRequest::get(["zones"])).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1/client/v4".to_string(),
            timeout_secs: 5,
        };
        let client = CloudflareClient::new(&config, TOKEN).unwrap();
        let err = client.execute(ApiRequest::get(["zones"])).await.unwrap_err();

        assert!(matches!(err, ApiError::Http(_)));
        assert!(err.to_string().starts_with("HTTP error occurred"));
    }

    #[tokio::test]
    async fn test_dot_segment_never_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/client/v4/zones")
            .with_status(200)
            .with_body(r#"{"success": true, "errors": [], "result": []}"#)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.execute(ApiRequest::get(["zones", "."])).await.unwrap_err();

        assert!(matches!(err, ApiError::Url(_)));
        mock.assert_async().await;
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = CloudflareClient::new(&ApiConfig::default(), "super_secret_token").unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
