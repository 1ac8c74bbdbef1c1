//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::exec::ExecArgs;
use crate::cli::commands::render::RenderArgs;
use crate::cli::commands::repl::ReplArgs;
use crate::domain::models::AdapterKind;

#[derive(Parser, Debug)]
#[command(name = "vterm")]
#[command(about = "vterm - a Linux terminal simulated by a remote language model", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this YAML file instead of .vterm/
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Upstream protocol to use (overrides configuration)
    #[arg(short, long, global = true, value_enum)]
    pub adapter: Option<AdapterArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive terminal session
    Repl(ReplArgs),

    /// Infer the output of a single command
    Exec(ExecArgs),

    /// Print the prompt that would be sent, without calling upstream
    Render(RenderArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdapterArg {
    /// Single-string completion protocol
    Legacy,
    /// Structured messages protocol
    Messages,
}

impl From<AdapterArg> for AdapterKind {
    fn from(arg: AdapterArg) -> Self {
        match arg {
            AdapterArg::Legacy => Self::Legacy,
            AdapterArg::Messages => Self::Messages,
        }
    }
}
