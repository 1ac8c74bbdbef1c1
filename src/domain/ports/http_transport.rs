use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::TransportError;

/// A JSON POST request as handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRequest {
    /// Absolute endpoint URL
    pub url: String,

    /// Header name/value pairs, sent in order
    pub headers: Vec<(String, String)>,

    /// JSON body
    pub body: Value,
}

impl JsonRequest {
    pub fn new(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    /// Add a header (builder style)
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value by case-insensitive name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Port trait for the HTTP capability adapters depend on
///
/// Implementations send `request.body` as JSON to `request.url` with the
/// given headers and return the decoded JSON reply. Connection pooling, TLS
/// and timeouts are the implementation's business. Implementations must not
/// retry: a failure is reported once, immediately.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, request: JsonRequest) -> Result<Value, TransportError>;
}
