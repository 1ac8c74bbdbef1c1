//! Implementation of the `vterm exec` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::{build_adapter, load_history};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::TerminalSession;

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Command line to simulate
    pub command: String,

    /// JSON file with prior turns: [{"input": "...", "output": "..."}]
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ExecOutput {
    pub adapter: String,
    pub command: String,
    pub output: String,
}

impl CommandOutput for ExecOutput {
    fn to_human(&self) -> String {
        self.output.clone()
    }
}

pub async fn execute(args: ExecArgs, config: &Config, json_mode: bool) -> Result<()> {
    let ledger = load_history(args.history.as_deref()).await?;
    let adapter = build_adapter(config)?;

    let session = TerminalSession::new(&ledger, adapter.as_ref());
    let result = session
        .complete(&args.command)
        .await
        .context("Completion request failed")?;

    output(
        &ExecOutput {
            adapter: session.adapter_name().to_string(),
            command: args.command,
            output: result,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_output_formats() {
        let result = ExecOutput {
            adapter: "message-completion".to_string(),
            command: "pwd".to_string(),
            output: "/home/user".to_string(),
        };

        assert_eq!(result.to_human(), "/home/user");
        assert_eq!(
            result.to_json(),
            serde_json::json!({
                "adapter": "message-completion",
                "command": "pwd",
                "output": "/home/user"
            })
        );
    }
}
