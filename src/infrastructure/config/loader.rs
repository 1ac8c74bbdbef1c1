use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Config;

/// Environment variable consulted when no credential is configured
pub const CREDENTIAL_ENV_VAR: &str = "ANTHROPIC_API_KEY";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("{0} endpoint cannot be empty")]
    EmptyEndpoint(&'static str),

    #[error("{0} model cannot be empty")]
    EmptyModel(&'static str),

    #[error("Invalid {adapter} max_tokens: {value}. Must be at least 1")]
    InvalidMaxTokens { adapter: &'static str, value: u32 },

    #[error("Invalid {adapter} temperature: {value}. Must be between 0 and 1")]
    InvalidTemperature { adapter: &'static str, value: f64 },

    #[error("Invalid top_p: {0}. Must be between 0 and 1")]
    InvalidTopP(f64),

    #[error("Prompt persona cannot be empty")]
    EmptyPersona,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .vterm/config.yaml
    /// 3. .vterm/local.yaml (optional local overrides)
    /// 4. Environment variables (VTERM_* prefix, `__` separates nested keys)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".vterm/config.yaml"))
            .merge(Yaml::file(".vterm/local.yaml"))
            .merge(Env::prefixed("VTERM_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::finish(config)
    }

    /// Load configuration from a specific file, still honoring `VTERM_*` overrides
    ///
    /// Unlike the default hierarchy, the file must exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        if !path.as_ref().is_file() {
            anyhow::bail!("Config file not found: {}", path.as_ref().display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("VTERM_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::finish(config)
    }

    fn finish(mut config: Config) -> Result<Config> {
        Self::apply_credential_fallback(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Fill an unset or blank credential from `ANTHROPIC_API_KEY`
    pub fn apply_credential_fallback(config: &mut Config) {
        let configured = config
            .credential
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());

        if !configured {
            config.credential = std::env::var(CREDENTIAL_ENV_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty());
        }
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        if config.prompt.persona.trim().is_empty() {
            return Err(ConfigError::EmptyPersona);
        }

        // Validate legacy adapter
        let legacy = &config.legacy;
        Self::validate_adapter(
            "legacy",
            &legacy.endpoint,
            &legacy.model,
            legacy.max_tokens,
            legacy.temperature,
        )?;
        if !(0.0..=1.0).contains(&legacy.top_p) {
            return Err(ConfigError::InvalidTopP(legacy.top_p));
        }

        // Validate messages adapter
        let messages = &config.messages;
        Self::validate_adapter(
            "messages",
            &messages.endpoint,
            &messages.model,
            messages.max_tokens,
            messages.temperature,
        )?;

        Ok(())
    }

    fn validate_adapter(
        adapter: &'static str,
        endpoint: &str,
        model: &str,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<(), ConfigError> {
        if endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint(adapter));
        }
        if model.trim().is_empty() {
            return Err(ConfigError::EmptyModel(adapter));
        }
        if max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens {
                adapter,
                value: max_tokens,
            });
        }
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ConfigError::InvalidTemperature {
                adapter,
                value: temperature,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.http.timeout_secs, 60);
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_accepts_uppercase_logging_values() {
        let mut config = Config::default();
        config.logging.level = "INFO".to_string();
        config.logging.format = "JSON".to_string();
        config.logging.rotation = "Hourly".to_string();

        ConfigLoader::validate(&config).expect("case should not matter");
        assert!(crate::infrastructure::logging::logger::parse_log_level(&config.logging.level).is_ok());
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidLogFormat(format) if format == "xml"
        ));
    }

    #[test]
    fn test_validate_invalid_rotation() {
        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidRotation(_)
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidTimeout(0)
        ));
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let mut config = Config::default();
        config.messages.endpoint = String::new();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyEndpoint("messages")
        ));
    }

    #[test]
    fn test_validate_empty_model() {
        let mut config = Config::default();
        config.legacy.model = "  ".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyModel("legacy")
        ));
    }

    #[test]
    fn test_validate_zero_max_tokens() {
        let mut config = Config::default();
        config.legacy.max_tokens = 0;

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidMaxTokens {
                adapter: "legacy",
                value: 0
            }
        ));
    }

    #[test]
    fn test_validate_temperature_out_of_range() {
        let mut config = Config::default();
        config.messages.temperature = 1.5;

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidTemperature {
                adapter: "messages",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_top_p_out_of_range() {
        let mut config = Config::default();
        config.legacy.top_p = -0.1;

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidTopP(_)
        ));
    }

    #[test]
    fn test_validate_empty_persona() {
        let mut config = Config::default();
        config.prompt.persona = String::new();

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::EmptyPersona
        ));
    }

    #[test]
    fn test_credential_fallback_from_env() {
        temp_env::with_var(CREDENTIAL_ENV_VAR, Some("sk-ant-from-env"), || {
            let mut config = Config::default();
            ConfigLoader::apply_credential_fallback(&mut config);
            assert_eq!(config.credential.as_deref(), Some("sk-ant-from-env"));
        });
    }

    #[test]
    fn test_configured_credential_wins_over_env() {
        temp_env::with_var(CREDENTIAL_ENV_VAR, Some("sk-ant-from-env"), || {
            let mut config = Config {
                credential: Some("sk-ant-from-file".to_string()),
                ..Default::default()
            };
            ConfigLoader::apply_credential_fallback(&mut config);
            assert_eq!(config.credential.as_deref(), Some("sk-ant-from-file"));
        });
    }

    #[test]
    fn test_blank_credential_without_env_stays_unset() {
        temp_env::with_var_unset(CREDENTIAL_ENV_VAR, || {
            let mut config = Config {
                credential: Some("   ".to_string()),
                ..Default::default()
            };
            ConfigLoader::apply_credential_fallback(&mut config);
            assert!(config.credential.is_none());
        });
    }
}
