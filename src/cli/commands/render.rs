//! Implementation of the `vterm render` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::load_history;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AdapterKind, Config, HistoryLedger};
use crate::services::PromptRenderer;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Command line to render as the open turn
    pub command: String,

    /// JSON file with prior turns: [{"input": "...", "output": "..."}]
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub adapter: AdapterKind,

    /// System field, only sent by the messages protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    pub prompt: String,
}

impl RenderOutput {
    pub fn build(config: &Config, ledger: &HistoryLedger, command: &str) -> Self {
        let renderer = PromptRenderer::new(config.prompt.clone());
        let system = match config.adapter {
            AdapterKind::Legacy => None,
            AdapterKind::Messages => Some(config.prompt.system_instruction().to_string()),
        };

        Self {
            adapter: config.adapter,
            system,
            prompt: renderer.render(ledger, command),
        }
    }
}

impl CommandOutput for RenderOutput {
    fn to_human(&self) -> String {
        self.prompt.clone()
    }
}

pub async fn execute(args: RenderArgs, config: &Config, json_mode: bool) -> Result<()> {
    let ledger = load_history(args.history.as_deref()).await?;
    output(&RenderOutput::build(config, &ledger, &args.command), json_mode);
    Ok(())
}
