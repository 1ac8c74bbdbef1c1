use async_trait::async_trait;

use crate::domain::errors::CompletionResult;
use crate::domain::models::HistoryLedger;

/// Port trait for "give me the next terminal output for this command"
///
/// Each implementation speaks one upstream wire protocol. All of them render
/// the same few-shot prompt and report failures through the same
/// `CompletionError` taxonomy, so callers can swap them freely behind
/// `Box<dyn CompletionAdapter>`.
///
/// # Contract
///
/// - An empty credential fails with `MissingCredential` before any request
///   is built or sent.
/// - Each call performs at most one network round trip. Nothing is retried.
/// - The ledger is only read. Calls with the same ledger, command and
///   upstream reply produce the same result.
#[async_trait]
pub trait CompletionAdapter: Send + Sync {
    /// Stable identifier of the wire protocol variant
    fn name(&self) -> &str;

    /// Infer the terminal output of `command` given the prior `ledger`
    async fn complete(&self, ledger: &HistoryLedger, command: &str) -> CompletionResult<String>;
}
