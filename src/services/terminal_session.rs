//! One conversation with the virtual terminal.

use tracing::{debug, instrument};

use crate::domain::errors::CompletionResult;
use crate::domain::models::HistoryLedger;
use crate::domain::ports::CompletionAdapter;

/// Binds a caller-owned ledger to a completion adapter.
///
/// The session borrows the ledger rather than copying it. To record a new
/// turn the caller drops the session, pushes onto the ledger and creates a
/// new session; the borrow checker rules out mutating the ledger while a
/// completion is in flight.
pub struct TerminalSession<'a> {
    ledger: &'a HistoryLedger,
    adapter: &'a dyn CompletionAdapter,
}

impl<'a> TerminalSession<'a> {
    pub fn new(ledger: &'a HistoryLedger, adapter: &'a dyn CompletionAdapter) -> Self {
        Self { ledger, adapter }
    }

    pub fn ledger(&self) -> &HistoryLedger {
        self.ledger
    }

    pub fn adapter_name(&self) -> &str {
        self.adapter.name()
    }

    /// Ask the adapter for the output of `command` given this session's ledger
    #[instrument(skip(self), fields(adapter = %self.adapter.name(), history = self.ledger.len()))]
    pub async fn complete(&self, command: &str) -> CompletionResult<String> {
        debug!("requesting terminal output");
        self.adapter.complete(self.ledger, command).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CompletionError;
    use crate::domain::models::HistoryEntry;
    use async_trait::async_trait;

    /// Echoes the command and the ledger size back
    struct EchoAdapter;

    #[async_trait]
    impl CompletionAdapter for EchoAdapter {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, ledger: &HistoryLedger, command: &str) -> CompletionResult<String> {
            if command.is_empty() {
                return Err(CompletionError::EmptyCompletion);
            }
            Ok(format!("{command}:{}", ledger.len()))
        }
    }

    #[tokio::test]
    async fn test_session_passes_ledger_and_command() {
        let ledger = HistoryLedger::from(vec![
            HistoryEntry::new("a", "1"),
            HistoryEntry::new("b", "2"),
        ]);
        let session = TerminalSession::new(&ledger, &EchoAdapter);

        assert_eq!(session.complete("ls").await.unwrap(), "ls:2");
        assert_eq!(session.adapter_name(), "echo");
        assert_eq!(session.ledger().len(), 2);
    }

    #[tokio::test]
    async fn test_session_propagates_errors() {
        let ledger = HistoryLedger::new();
        let session = TerminalSession::new(&ledger, &EchoAdapter);

        let result = session.complete("").await;
        assert!(matches!(result, Err(CompletionError::EmptyCompletion)));
    }

    #[tokio::test]
    async fn test_ledger_grows_between_sessions() {
        let adapter = EchoAdapter;
        let mut ledger = HistoryLedger::new();

        for command in ["pwd", "ls", "id"] {
            let output = TerminalSession::new(&ledger, &adapter)
                .complete(command)
                .await
                .unwrap();
            ledger.push(HistoryEntry::new(command, output));
        }

        let outputs: Vec<&str> = ledger.iter().map(|e| e.output.as_str()).collect();
        assert_eq!(outputs, vec!["pwd:0", "ls:1", "id:2"]);
    }
}
