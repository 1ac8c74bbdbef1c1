pub mod config;
pub mod history;
pub mod prompt;

pub use config::{
    AdapterKind, Config, HttpConfig, LegacyAdapterConfig, LoggingConfig, MessageAdapterConfig,
};
pub use history::{HistoryEntry, HistoryLedger};
pub use prompt::{PromptTemplate, COMMAND_MARKER, OUTPUT_MARKER};
