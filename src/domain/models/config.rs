use serde::{Deserialize, Serialize};

use super::prompt::PromptTemplate;

/// Main configuration structure for vterm
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Which upstream wire protocol to talk
    #[serde(default)]
    pub adapter: AdapterKind,

    /// API credential; falls back to `ANTHROPIC_API_KEY` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Persona and few-shot examples
    #[serde(default)]
    pub prompt: PromptTemplate,

    /// Legacy completion adapter settings
    #[serde(default)]
    pub legacy: LegacyAdapterConfig,

    /// Message completion adapter settings
    #[serde(default)]
    pub messages: MessageAdapterConfig,
}

/// Upstream protocol selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    /// Single-string prompt, `choices[].text` response
    Legacy,
    /// Multi-turn messages, `content[].text` response
    #[default]
    Messages,
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Messages => write!(f, "messages"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// Rotation policy for file logs (daily, hourly, never)
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    60
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Settings for the single-prompt completion protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LegacyAdapterConfig {
    #[serde(default = "default_legacy_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub temperature: f64,

    /// Output cap; one line of terminal output needs very little
    #[serde(default = "default_legacy_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_top_p")]
    pub top_p: f64,

    #[serde(default)]
    pub frequency_penalty: f64,

    #[serde(default)]
    pub presence_penalty: f64,

    /// Stop sequences; a lone newline ends the output after one line
    #[serde(default = "default_stop")]
    pub stop: Vec<String>,
}

fn default_legacy_endpoint() -> String {
    "https://api.anthropic.com/v1/completions".to_string()
}

const fn default_legacy_max_tokens() -> u32 {
    100
}

const fn default_top_p() -> f64 {
    1.0
}

fn default_stop() -> Vec<String> {
    vec!["\n".to_string()]
}

impl Default for LegacyAdapterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_legacy_endpoint(),
            model: default_model(),
            temperature: 0.0,
            max_tokens: default_legacy_max_tokens(),
            top_p: default_top_p(),
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            stop: default_stop(),
        }
    }
}

/// Settings for the structured messages protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MessageAdapterConfig {
    #[serde(default = "default_messages_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub temperature: f64,

    #[serde(default = "default_messages_max_tokens")]
    pub max_tokens: u32,

    /// Value of the `anthropic-version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_messages_endpoint() -> String {
    "https://api.anthropic.com/v1/messages".to_string()
}

const fn default_messages_max_tokens() -> u32 {
    1000
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

impl Default for MessageAdapterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_messages_endpoint(),
            model: default_model(),
            temperature: 0.0,
            max_tokens: default_messages_max_tokens(),
            api_version: default_api_version(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_defaults_are_deterministic_sampling() {
        let config = LegacyAdapterConfig::default();
        assert_eq!(config.model, "claude-3-opus-20240229");
        assert!(config.temperature.abs() < f64::EPSILON);
        assert!((config.top_p - 1.0).abs() < f64::EPSILON);
        assert!(config.frequency_penalty.abs() < f64::EPSILON);
        assert!(config.presence_penalty.abs() < f64::EPSILON);
        assert_eq!(config.max_tokens, 100);
        assert_eq!(config.stop, vec!["\n".to_string()]);
    }

    #[test]
    fn test_messages_cap_exceeds_legacy_cap() {
        assert!(MessageAdapterConfig::default().max_tokens > LegacyAdapterConfig::default().max_tokens);
    }

    #[test]
    fn test_adapter_kind_serde() {
        let kind: AdapterKind = serde_yaml::from_str("legacy").unwrap();
        assert_eq!(kind, AdapterKind::Legacy);
        assert_eq!(AdapterKind::default(), AdapterKind::Messages);
        assert_eq!(AdapterKind::Messages.to_string(), "messages");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
adapter: legacy
logging:
  level: debug
http:
  timeout_secs: 5
legacy:
  endpoint: http://localhost:8080/v1/completions
  max_tokens: 64
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(config.adapter, AdapterKind::Legacy);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.legacy.endpoint, "http://localhost:8080/v1/completions");
        assert_eq!(config.legacy.max_tokens, 64);
        assert_eq!(config.legacy.stop, vec!["\n".to_string()]);
        assert_eq!(config.messages, MessageAdapterConfig::default());
        assert!(config.credential.is_none());
    }
}
