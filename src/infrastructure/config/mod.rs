//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Credential fallback to `ANTHROPIC_API_KEY`
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, CREDENTIAL_ENV_VAR};
