//! CLI command implementations.

pub mod exec;
pub mod render;
pub mod repl;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::cli::types::AdapterArg;
use crate::domain::models::{Config, HistoryLedger};
use crate::domain::ports::CompletionAdapter;
use crate::infrastructure::completion::create_adapter;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::http::ReqwestTransport;

/// Load configuration from `path` (or the default hierarchy) and apply CLI overrides
pub fn load_config(path: Option<&Path>, adapter: Option<AdapterArg>) -> Result<Config> {
    let mut config = match path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(adapter) = adapter {
        config.adapter = adapter.into();
    }

    Ok(config)
}

/// Read a JSON array of `{input, output}` turns; a missing path means an empty ledger
pub async fn load_history(path: Option<&Path>) -> Result<HistoryLedger> {
    let Some(path) = path else {
        return Ok(HistoryLedger::new());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    let ledger: HistoryLedger = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse history file {}", path.display()))?;

    debug!(entries = ledger.len(), path = %path.display(), "history loaded");
    Ok(ledger)
}

/// Build the configured adapter on top of a reqwest transport
pub fn build_adapter(config: &Config) -> Result<Box<dyn CompletionAdapter>> {
    let transport = ReqwestTransport::new(&config.http).context("Failed to build HTTP transport")?;
    Ok(create_adapter(config, Arc::new(transport)))
}
