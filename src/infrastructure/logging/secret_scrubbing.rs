use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static API_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sk-(?:ant-)?[a-zA-Z0-9_-]{16,}").expect("valid api key regex"));

static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9_\-\.]+").expect("valid bearer regex"));

static KEY_FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(["']?(?:x-api-key|api_key|apikey|credential)["']?\s*[:=]\s*)["']?[a-zA-Z0-9_\-\.]{8,}["']?"#)
        .expect("valid key field regex")
});

/// Redacts credentials from strings before they reach a log sink
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of API keys, bearer tokens and key-like fields
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = API_KEY_PATTERN.replace_all(message, "[API_KEY_REDACTED]");
        let scrubbed = BEARER_PATTERN.replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        KEY_FIELD_PATTERN
            .replace_all(&scrubbed, "${1}[REDACTED]")
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}

/// Short, log-safe form of a credential: first 8 chars then a marker
pub fn redact_credential(credential: &str) -> String {
    if credential.is_empty() {
        "[EMPTY]".to_string()
    } else if credential.len() > 8 && credential.is_char_boundary(8) {
        format!("{}...[REDACTED]", &credential[..8])
    } else {
        "[REDACTED]".to_string()
    }
}
