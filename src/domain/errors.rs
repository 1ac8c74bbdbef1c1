//! Domain errors for the virtual terminal.

use thiserror::Error;

/// Errors produced by the HTTP transport capability.
///
/// Transport errors carry plain strings rather than client-library error
/// types so that any transport implementation (reqwest, an in-memory test
/// double, a proxy) can report failures through the same type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, TLS, timeout or other network-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success HTTP status
    #[error("Upstream returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A request header name or value could not be encoded
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Response body was not valid JSON
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// Response was JSON but did not match the expected envelope
    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(String),
}

impl TransportError {
    /// Returns true if the upstream rejected the credential (HTTP 401/403)
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Errors returned by a completion adapter.
///
/// Both wire protocols normalize their failures into this taxonomy so that
/// callers can hold either adapter behind `dyn CompletionAdapter`.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Credential was empty; no request was built
    #[error("API key is missing")]
    MissingCredential,

    /// Request payload could not be serialized
    #[error("Failed to encode request: {0}")]
    RequestEncoding(#[source] serde_json::Error),

    /// Transport failed or returned something that is not a valid envelope
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Upstream succeeded but returned no choices or content blocks
    #[error("no completion choices returned by the API")]
    EmptyCompletion,
}

pub type CompletionResult<T> = Result<T, CompletionError>;
