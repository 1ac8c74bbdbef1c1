//! Legacy single-prompt completion adapter

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::types::{LegacyCompletionRequest, LegacyCompletionResponse};
use crate::domain::errors::{CompletionError, CompletionResult, TransportError};
use crate::domain::models::{HistoryLedger, LegacyAdapterConfig, PromptTemplate};
use crate::domain::ports::{CompletionAdapter, HttpTransport, JsonRequest};
use crate::infrastructure::logging::redact_credential;
use crate::services::PromptRenderer;

pub const LEGACY_ADAPTER_NAME: &str = "legacy-completion";

/// Sends the rendered prompt as one flat string and returns the first
/// choice's text unmodified. Authenticates with a bearer token.
pub struct LegacyCompletionAdapter {
    config: LegacyAdapterConfig,
    renderer: PromptRenderer,
    credential: String,
    transport: Arc<dyn HttpTransport>,
}

impl LegacyCompletionAdapter {
    /// Adapter with default endpoint, model, sampling and template
    pub fn new(credential: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_config(
            LegacyAdapterConfig::default(),
            PromptTemplate::default(),
            credential,
            transport,
        )
    }

    pub fn with_config(
        config: LegacyAdapterConfig,
        template: PromptTemplate,
        credential: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let credential = credential.into();
        debug!(
            endpoint = %config.endpoint,
            model = %config.model,
            api_key = %redact_credential(&credential),
            "Initializing legacy completion adapter"
        );

        Self {
            config,
            renderer: PromptRenderer::new(template),
            credential,
            transport,
        }
    }

    pub fn config(&self) -> &LegacyAdapterConfig {
        &self.config
    }

    /// Wire request for `command` against `ledger`
    pub fn build_request(&self, ledger: &HistoryLedger, command: &str) -> LegacyCompletionRequest {
        LegacyCompletionRequest {
            model: self.config.model.clone(),
            prompt: self.renderer.render(ledger, command),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
            frequency_penalty: self.config.frequency_penalty,
            presence_penalty: self.config.presence_penalty,
            stop: self.config.stop.clone(),
        }
    }

    fn extract_text(body: Value) -> CompletionResult<String> {
        let response: LegacyCompletionResponse = serde_json::from_value(body)
            .map_err(|e| TransportError::MalformedEnvelope(e.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyCompletion)?;

        Ok(choice.text)
    }
}

#[async_trait]
impl CompletionAdapter for LegacyCompletionAdapter {
    fn name(&self) -> &str {
        LEGACY_ADAPTER_NAME
    }

    #[instrument(skip(self, ledger), fields(adapter = LEGACY_ADAPTER_NAME, history = ledger.len()))]
    async fn complete(&self, ledger: &HistoryLedger, command: &str) -> CompletionResult<String> {
        if self.credential.is_empty() {
            return Err(CompletionError::MissingCredential);
        }

        let request = self.build_request(ledger, command);
        debug!(prompt_bytes = request.prompt.len(), "built completion request");

        let body = serde_json::to_value(&request).map_err(CompletionError::RequestEncoding)?;
        let http_request = JsonRequest::new(&self.config.endpoint, body)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.credential));

        let reply = self.transport.post_json(http_request).await?;
        let text = Self::extract_text(reply)?;

        info!(output_bytes = text.len(), "completion received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_first_choice_unmodified() {
        let body = json!({"choices": [{"text": "```prova.txt```"}, {"text": "other"}]});
        assert_eq!(
            LegacyCompletionAdapter::extract_text(body).unwrap(),
            "```prova.txt```"
        );
    }

    #[test]
    fn test_extract_empty_choices() {
        let body = json!({"choices": []});
        assert!(matches!(
            LegacyCompletionAdapter::extract_text(body),
            Err(CompletionError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_extract_malformed_envelope() {
        let body = json!({"error": {"message": "nope"}});
        assert!(matches!(
            LegacyCompletionAdapter::extract_text(body),
            Err(CompletionError::Transport(TransportError::MalformedEnvelope(_)))
        ));
    }
}
