//! Structured messages completion adapter

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::types::{Message, MessageRequest, MessageResponse};
use crate::domain::errors::{CompletionError, CompletionResult, TransportError};
use crate::domain::models::{HistoryLedger, MessageAdapterConfig, PromptTemplate};
use crate::domain::ports::{CompletionAdapter, HttpTransport, JsonRequest};
use crate::infrastructure::logging::redact_credential;
use crate::services::PromptRenderer;

pub const MESSAGE_ADAPTER_NAME: &str = "message-completion";

const CODE_FENCE: &str = "```";

/// Sends the rendered prompt as the only content block of a single user
/// message, with the template persona in the `system` field.
///
/// The model tends to wrap terminal output in a fenced code block; every
/// fence marker is removed from the returned text.
pub struct MessageCompletionAdapter {
    config: MessageAdapterConfig,
    renderer: PromptRenderer,
    credential: String,
    transport: Arc<dyn HttpTransport>,
}

impl MessageCompletionAdapter {
    /// Adapter with default endpoint, model, sampling and template
    pub fn new(credential: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_config(
            MessageAdapterConfig::default(),
            PromptTemplate::default(),
            credential,
            transport,
        )
    }

    pub fn with_config(
        config: MessageAdapterConfig,
        template: PromptTemplate,
        credential: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let credential = credential.into();
        debug!(
            endpoint = %config.endpoint,
            model = %config.model,
            api_version = %config.api_version,
            api_key = %redact_credential(&credential),
            "Initializing message completion adapter"
        );

        Self {
            config,
            renderer: PromptRenderer::new(template),
            credential,
            transport,
        }
    }

    pub fn config(&self) -> &MessageAdapterConfig {
        &self.config
    }

    /// Wire request for `command` against `ledger`
    pub fn build_request(&self, ledger: &HistoryLedger, command: &str) -> MessageRequest {
        MessageRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: self.renderer.template().system_instruction().to_string(),
            messages: vec![Message::user_text(self.renderer.render(ledger, command))],
        }
    }

    fn extract_text(body: Value) -> CompletionResult<String> {
        let response: MessageResponse = serde_json::from_value(body)
            .map_err(|e| TransportError::MalformedEnvelope(e.to_string()))?;

        debug!(
            stop_reason = ?response.stop_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "decoded message response"
        );

        let block = response
            .content
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyCompletion)?;

        Ok(strip_code_fences(&block.text.unwrap_or_default()))
    }
}

/// Remove every literal triple-backtick sequence
pub fn strip_code_fences(text: &str) -> String {
    text.replace(CODE_FENCE, "")
}

#[async_trait]
impl CompletionAdapter for MessageCompletionAdapter {
    fn name(&self) -> &str {
        MESSAGE_ADAPTER_NAME
    }

    #[instrument(skip(self, ledger), fields(adapter = MESSAGE_ADAPTER_NAME, history = ledger.len()))]
    async fn complete(&self, ledger: &HistoryLedger, command: &str) -> CompletionResult<String> {
        if self.credential.is_empty() {
            return Err(CompletionError::MissingCredential);
        }

        let request = self.build_request(ledger, command);
        let body = serde_json::to_value(&request).map_err(CompletionError::RequestEncoding)?;
        debug!(model = %request.model, "built messages request");

        let http_request = JsonRequest::new(&self.config.endpoint, body)
            .header("Content-Type", "application/json")
            .header("x-api-key", self.credential.as_str())
            .header("anthropic-version", self.config.api_version.as_str());

        let reply = self.transport.post_json(http_request).await?;
        let text = Self::extract_text(reply)?;

        info!(output_bytes = text.len(), "completion received");
        Ok(text)
    }
}
