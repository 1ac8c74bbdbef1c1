//! Command history replayed into every prompt.

use serde::{Deserialize, Serialize};

/// One past command and the terminal output attributed to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Command line as typed by the user
    pub input: String,

    /// Output the terminal produced for that command
    pub output: String,
}

impl HistoryEntry {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Ordered log of past command/output pairs, earliest first.
///
/// The ledger is owned by the caller. Adapters borrow it immutably for the
/// duration of a single completion, so the order of entries here is exactly
/// the order in which they are replayed into the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end (most recent position)
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl From<Vec<HistoryEntry>> for HistoryLedger {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<HistoryEntry> for HistoryLedger {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HistoryLedger {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
