//! Few-shot prompt template shared by every completion adapter.

use serde::{Deserialize, Serialize};

/// Marker that opens a command turn
pub const COMMAND_MARKER: &str = "A:";

/// Marker that opens the output of a turn
pub const OUTPUT_MARKER: &str = "Q:";

const DEFAULT_PERSONA: &str = "You will act as an Ubuntu Linux terminal. User commands and expected terminal outputs are provided. Your responses must be contained within a single code block, reflecting the terminal's behavior without additional explanations unless explicitly requested.";

const DEFAULT_FEW_SHOT: &str =
    "A:pwd\n\nQ:/home/user\n\nA:cat hello.txt\n\nQ:world\n\nA:echo 1234\n\nQ:1234\n\nA:pwd\n\nQ:";

/// Terminal persona plus example dialogue.
///
/// The persona is the single source of the terminal's instructions: it opens
/// the rendered preamble and is also sent verbatim as the system instruction
/// by adapters whose wire format has a dedicated system field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PromptTemplate {
    /// Instruction describing the terminal persona
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Example turns appended after the persona
    #[serde(default = "default_few_shot")]
    pub few_shot: String,
}

fn default_persona() -> String {
    DEFAULT_PERSONA.to_string()
}

fn default_few_shot() -> String {
    DEFAULT_FEW_SHOT.to_string()
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            persona: default_persona(),
            few_shot: default_few_shot(),
        }
    }
}

impl PromptTemplate {
    pub fn new(persona: impl Into<String>, few_shot: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            few_shot: few_shot.into(),
        }
    }

    /// Fixed text every rendered prompt starts with
    pub fn preamble(&self) -> String {
        format!("{}\n\n{}", self.persona, self.few_shot)
    }

    /// Text sent in a dedicated system field
    pub fn system_instruction(&self) -> &str {
        &self.persona
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preamble_text() {
        let template = PromptTemplate::default();
        assert_eq!(
            template.preamble(),
            "You will act as an Ubuntu Linux terminal. User commands and expected terminal outputs are provided. Your responses must be contained within a single code block, reflecting the terminal's behavior without additional explanations unless explicitly requested.\n\nA:pwd\n\nQ:/home/user\n\nA:cat hello.txt\n\nQ:world\n\nA:echo 1234\n\nQ:1234\n\nA:pwd\n\nQ:"
        );
    }

    #[test]
    fn test_system_instruction_is_persona() {
        let template = PromptTemplate::new("You are a BusyBox shell.", "A:ls\n\nQ:bin\n\n");
        assert_eq!(template.system_instruction(), "You are a BusyBox shell.");
        assert!(template.preamble().starts_with(template.system_instruction()));
    }

    #[test]
    fn test_yaml_partial_override_keeps_defaults() {
        let template: PromptTemplate =
            serde_yaml::from_str("persona: You are an Alpine terminal.").unwrap();
        assert_eq!(template.persona, "You are an Alpine terminal.");
        assert_eq!(template.few_shot, DEFAULT_FEW_SHOT);
    }
}
