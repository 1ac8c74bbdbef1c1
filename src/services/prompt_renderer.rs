//! Few-shot prompt rendering.
//!
//! Turns a [`PromptTemplate`], a [`HistoryLedger`] and a new command into the
//! flat prompt text every adapter sends upstream. The output is a pure
//! function of its inputs.

use crate::domain::models::{HistoryLedger, PromptTemplate, COMMAND_MARKER, OUTPUT_MARKER};

/// Renders ledgers into prompt text using one template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptRenderer {
    template: PromptTemplate,
}

impl PromptRenderer {
    pub fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Render the preamble, every ledger turn, then one open turn for `command`
    pub fn render(&self, ledger: &HistoryLedger, command: &str) -> String {
        render(&self.template, ledger, command)
    }
}

/// Render `ledger` and `command` with `template`.
///
/// Layout:
/// `<preamble>` then `A:<input>\n\nQ:<output>\n\n` for each entry in order,
/// then `A:<command>\n\nQ:` left open for the model to fill in. Markers are
/// not escaped and no length limit is applied.
pub fn render(template: &PromptTemplate, ledger: &HistoryLedger, command: &str) -> String {
    let preamble = template.preamble();
    let turns_len: usize = ledger
        .iter()
        .map(|entry| entry.input.len() + entry.output.len() + 8)
        .sum();

    let mut prompt = String::with_capacity(preamble.len() + turns_len + command.len() + 6);
    prompt.push_str(&preamble);

    for entry in ledger {
        push_turn(&mut prompt, &entry.input);
        prompt.push_str(&entry.output);
        prompt.push_str("\n\n");
    }

    push_turn(&mut prompt, command);
    prompt
}

fn push_turn(prompt: &mut String, command: &str) {
    prompt.push_str(COMMAND_MARKER);
    prompt.push_str(command);
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_MARKER);
}
