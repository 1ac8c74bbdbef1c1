use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::errors::TransportError;
use crate::domain::models::HttpConfig;
use crate::domain::ports::{HttpTransport, JsonRequest};
use crate::infrastructure::logging::SecretScrubber;

/// `HttpTransport` backed by a shared reqwest client
///
/// One client is reused across calls for connection pooling. There is no
/// retry or rate limiting here: each call is exactly one POST.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: ReqwestClient,
    scrubber: SecretScrubber,
}

impl ReqwestTransport {
    /// Build a transport with the given timeout settings
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(4)
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(http_client))
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(http_client: ReqwestClient) -> Self {
        Self {
            http_client,
            scrubber: SecretScrubber::new(),
        }
    }

    fn build_headers(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
            // The value may be a credential, so it is never echoed back
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| TransportError::InvalidHeader(format!("{name}: invalid value")))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    /// Classify a non-success response
    async fn handle_error_response(&self, response: Response) -> TransportError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        let message = extract_error_message(&body);
        warn!(
            status = status.as_u16(),
            message = %self.scrubber.scrub_message(&message),
            "upstream returned an error status"
        );

        TransportError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// Pull `error.message` out of an upstream error body, or fall back to the raw body
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn post_json(&self, request: JsonRequest) -> Result<Value, TransportError> {
        let headers = Self::build_headers(&request.headers)?;

        debug!("POST {}", request.url);

        let response = self
            .http_client
            .post(&request.url)
            .headers(headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response: {e}")))?;

        serde_json::from_str(&body).map_err(|e| TransportError::InvalidBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(&HttpConfig { timeout_secs: 5 });
        assert!(transport.is_ok());
    }

    #[test]
    fn test_build_headers() {
        let headers = ReqwestTransport::build_headers(&[
            ("x-api-key".to_string(), "secret".to_string()),
            ("anthropic-version".to_string(), "2023-06-01".to_string()),
        ])
        .unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers["anthropic-version"], "2023-06-01");
    }

    #[test]
    fn test_build_headers_rejects_bad_name() {
        let result = ReqwestTransport::build_headers(&[("bad header".to_string(), "v".to_string())]);
        assert!(matches!(result, Err(TransportError::InvalidHeader(_))));
    }

    #[test]
    fn test_build_headers_does_not_echo_value() {
        let result =
            ReqwestTransport::build_headers(&[("x-api-key".to_string(), "sk\nsecret".to_string())]);
        match result {
            Err(TransportError::InvalidHeader(msg)) => assert!(!msg.contains("secret")),
            other => panic!("expected InvalidHeader, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        assert_eq!(extract_error_message(body), "invalid x-api-key");
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
    }
}
