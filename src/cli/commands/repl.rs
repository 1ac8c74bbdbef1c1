//! Implementation of the `vterm repl` command.
//!
//! Reads one command per line, asks the adapter for its output and records
//! every successful turn so later commands see a consistent machine.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use super::{build_adapter, load_history};
use crate::domain::models::{Config, HistoryEntry, HistoryLedger};
use crate::domain::ports::CompletionAdapter;
use crate::services::TerminalSession;

const PROMPT: &str = "$ ";
const EXIT_COMMAND: &str = "exit";

#[derive(Args, Debug)]
pub struct ReplArgs {
    /// JSON file with prior turns to seed the session
    #[arg(long, value_name = "FILE")]
    pub history: Option<PathBuf>,
}

/// Drive the read-complete-record loop until `exit` or end of input.
///
/// Failed completions are reported on `writer` and leave the ledger
/// untouched. Returns the final ledger.
pub async fn run_loop<R, W>(
    adapter: &dyn CompletionAdapter,
    mut ledger: HistoryLedger,
    reader: R,
    mut writer: W,
) -> Result<HistoryLedger>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == EXIT_COMMAND {
            break;
        }

        let result = TerminalSession::new(&ledger, adapter).complete(command).await;
        match result {
            Ok(output) => {
                writer.write_all(output.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                ledger.push(HistoryEntry::new(command, output));
            }
            Err(err) => {
                warn!(error = %err, "completion failed");
                writer.write_all(format!("vterm: {err}\n").as_bytes()).await?;
            }
        }
    }

    writer.flush().await?;
    Ok(ledger)
}

pub async fn execute(args: ReplArgs, config: &Config) -> Result<()> {
    let ledger = load_history(args.history.as_deref()).await?;
    let adapter = build_adapter(config)?;
    info!(adapter = adapter.name(), history = ledger.len(), "starting session");

    let ledger = run_loop(
        adapter.as_ref(),
        ledger,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    info!(turns = ledger.len(), "session ended");
    Ok(())
}
