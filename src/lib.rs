//! vterm - a Linux terminal simulated by a remote language model
//!
//! Commands typed by the user are rendered into a few-shot prompt together
//! with every prior command/output pair, sent to an upstream completion
//! service, and the returned text is presented as the terminal's output.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): History ledger, prompt template, errors and ports
//! - **Service Layer** (`services`): Prompt rendering and terminal sessions
//! - **Infrastructure Layer** (`infrastructure`): Completion adapters, HTTP, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vterm::{HistoryLedger, MessageCompletionAdapter, ReqwestTransport, TerminalSession};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let transport = Arc::new(ReqwestTransport::new(&Default::default())?);
//!     let adapter = MessageCompletionAdapter::new("sk-ant-...", transport);
//!     let ledger = HistoryLedger::new();
//!     let output = TerminalSession::new(&ledger, &adapter).complete("pwd").await?;
//!     println!("{output}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CompletionError, CompletionResult, TransportError};
pub use domain::models::{
    AdapterKind, Config, HistoryEntry, HistoryLedger, LoggingConfig, PromptTemplate,
};
pub use domain::ports::{CompletionAdapter, HttpTransport, JsonRequest};
pub use infrastructure::completion::{
    create_adapter, LegacyCompletionAdapter, MessageCompletionAdapter,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::ReqwestTransport;
pub use services::{PromptRenderer, TerminalSession};
