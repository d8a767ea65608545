//! Outbound request description.
//!
//! Handlers never talk to `reqwest` directly. They describe the call as an
//! [`ApiRequest`] and hand it to a [`CloudflareApi`](super::CloudflareApi)
//! backend, which keeps request construction pure and easy to inspect.

use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// Body sent with a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Sent as `application/json`.
    Json(Value),
    /// Sent verbatim as `text/plain` (KV values).
    Text(String),
}

/// How the response of a request is turned into a result value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// JSON `{success, result, errors}` envelope; yields `result`.
    Envelope,
    /// Raw body text, yielded as a JSON string.
    RawText,
    /// Body is ignored; yields the given message once the status is 2xx.
    Acknowledge(&'static str),
}

/// A single call against the Cloudflare API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub response: ResponseKind,
}

impl ApiRequest {
    /// Create a request for the given path segments, relative to the API base.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: RequestBody::Empty,
            response: ResponseKind::Envelope,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value was supplied.
    pub fn query_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a raw text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text(body.into());
        self
    }

    /// Set how the response should be interpreted.
    pub fn expect(mut self, response: ResponseKind) -> Self {
        self.response = response;
        self
    }

    /// Human-readable path, used for logging.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Look up a query parameter by name.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The JSON body, if any.
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Build the full URL against `base`.
    ///
    /// Every path segment is percent-encoded, so identifiers and KV keys
    /// containing `/` or spaces stay a single segment. Empty, `.` and `..`
    /// segments are rejected since they would address a different resource.
    pub fn url(&self, base: &str) -> ApiResult<Url> {
        if let Some(segment) = self
            .segments
            .iter()
            .find(|s| matches!(s.as_str(), "" | "." | ".."))
        {
            return Err(ApiError::url(format!(
                "invalid path segment '{}' in {}",
                segment,
                self.path()
            )));
        }

        let mut url = Url::parse(base).map_err(|e| ApiError::url(format!("{}: {}", base, e)))?;

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::url(format!("{} cannot be a base URL", base)))?;
            path.pop_if_empty().extend(self.segments.iter());
        }

        if !self.query.is_empty() {
            let query = serde_urlencoded::to_string(&self.query)
                .map_err(|e| ApiError::url(e.to_string()))?;
            url.set_query(Some(&query));
        }

        Ok(url)
    }
}
