//! REST Client Wrappers
//!
//! Frontend bindings to the care backend, organized by domain. Each wrapper
//! builds one `ApiRequest`; `ApiClient` attaches the base URL and bearer
//! token and hands it to a `Transport`.

mod transport;
mod visit;
mod wellness;
mod directory;
#[cfg(test)]
pub mod testing;

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use transport::HttpTransport;
pub use visit::*;
pub use wellness::*;
pub use directory::*;

/// Characters left as-is in path segments and query values
const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

// ========================
// Request Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// Endpoint call relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn post(path: impl Into<String>, body: &impl Serialize) -> ApiResult<Self> {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn patch(path: impl Into<String>, body: &impl Serialize) -> ApiResult<Self> {
        Self::new(Method::Patch, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: &impl Serialize) -> ApiResult<Self> {
        Self::new(Method::Put, path).with_body(body)
    }

    fn with_body(mut self, body: &impl Serialize) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

/// Fully resolved request, ready for the wire
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body as received
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes prepared requests
pub trait Transport {
    async fn execute(&self, request: PreparedRequest) -> ApiResult<RawResponse>;
}

/// Percent-encode one path segment (ids come from the server, not trusted to be URL-safe)
pub fn segment(value: &str) -> String {
    utf8_percent_encode(value, URL_SAFE).to_string()
}

// ========================
// Client
// ========================

/// Authenticated client bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    base_url: String,
    token: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            transport,
        }
    }

    /// Resolve URL and attach auth headers
    pub fn prepare(&self, request: ApiRequest) -> PreparedRequest {
        let mut url = format!("{}{}", self.base_url, request.path);
        if !request.query.is_empty() {
            let query = request
                .query
                .iter()
                .map(|(key, value)| format!("{}={}", segment(key), segment(value)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {}", self.token)),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        let body = request.body.map(|value| value.to_string());
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        PreparedRequest { method: request.method, url, headers, body }
    }

    /// Send and decode a JSON response body
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let raw = self.exchange(request).await?;
        decode_body(&raw.body)
    }

    /// Send and ignore whatever body comes back
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<()> {
        self.exchange(request).await.map(|_| ())
    }

    async fn exchange(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let prepared = self.prepare(request);
        log::debug!("{} {}", prepared.method, prepared.url);
        let raw = self.transport.execute(prepared).await?;
        if raw.is_success() {
            Ok(raw)
        } else {
            Err(ApiError::Http { status: raw.status, message: server_message(&raw.body) })
        }
    }
}

fn decode_body<R: DeserializeOwned>(body: &str) -> ApiResult<R> {
    let body = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}

/// Pull a human-readable message out of an error body
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::testing::{client, RecordingTransport, BASE_URL};
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_prepare_attaches_auth_and_query() {
        let api = client(RecordingTransport::new());
        let prepared = api.prepare(ApiRequest::get("/caregivers/available").query("startTime", "09:00"));

        assert_eq!(prepared.url, format!("{}/caregivers/available?startTime=09%3A00", BASE_URL));
        assert_eq!(prepared.header("authorization"), Some("Bearer tok-123"));
        assert_eq!(prepared.header("Content-Type"), None);
        assert!(prepared.body.is_none());
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let api = ApiClient::new("https://care.test/api/", "t", RecordingTransport::new());
        assert_eq!(api.prepare(ApiRequest::get("/patients")).url, "https://care.test/api/patients");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("65f0c2a1"), "65f0c2a1");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_error_status_carries_server_message() {
        let transport = RecordingTransport::new().respond(404, json!({ "message": "Visit not found" }));
        let api = client(transport);

        let err = block_on(api.fetch::<serde_json::Value>(ApiRequest::get("/visits/x"))).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 404, message: Some("Visit not found".into()) });
    }

    #[test]
    fn test_error_field_and_plain_text_bodies() {
        assert_eq!(server_message(r#"{"error":"Token expired"}"#), Some("Token expired".into()));
        assert_eq!(server_message("Bad Gateway"), None);
        assert_eq!(server_message(r#"{"message":42}"#), None);
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let transport = RecordingTransport::new().respond_raw(204, "");
        let api = client(transport);
        let value: Option<serde_json::Value> = block_on(api.fetch(ApiRequest::delete("/visits/1"))).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_network_failure_passes_through() {
        let transport = RecordingTransport::new().fail(ApiError::Network("offline".into()));
        let api = client(transport);
        let err = block_on(api.execute(ApiRequest::get("/patients"))).unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
    }
}
