//! Request and response types for the two upstream completion protocols
//!
//! Field names and nesting follow the upstream JSON schemas exactly since
//! these types cross the wire. Fields the terminal never inspects but the
//! upstream may send in varying shapes are kept as opaque JSON values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Single-prompt completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyCompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub stop: Vec<String>,
}

/// Single-prompt completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyCompletionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Candidate continuations; required, may be empty
    pub choices: Vec<CompletionChoice>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub usage: CompletionUsage,
}

/// One candidate continuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionChoice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    /// Opaque, passed through verbatim
    #[serde(default)]
    pub logprobs: Value,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionUsage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tokens: u64,
}

/// Structured messages request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system: String,
    pub messages: Vec<Message>,
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender ("user" or "assistant")
    pub role: String,

    pub content: Vec<ContentBlock>,
}

impl Message {
    /// A user message carrying one text block
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![ContentBlock::text(text)],
        }
    }
}

/// Typed unit of message content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Type of content block (e.g., "text")
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub content_type: String,

    /// Text content (present when `content_type` is "text")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: Some(text.into()),
        }
    }
}

/// Structured messages response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Response type (always "message")
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub response_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub usage: MessageUsage,

    /// Content blocks; required, may be empty
    pub content: Vec<ContentBlock>,

    #[serde(default)]
    pub stop_reason: Option<String>,

    /// Opaque, passed through verbatim
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub stop_sequence: Value,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageUsage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub input_tokens: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub output_tokens: u64,
}

/// Treat an explicit JSON `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
