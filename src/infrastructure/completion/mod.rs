//! Completion adapters for the two upstream wire protocols
//!
//! Both adapters share the prompt renderer and the persona text; only the
//! request envelope, authentication headers and response extraction differ.

pub mod legacy;
pub mod messages;
pub mod types;

use std::sync::Arc;

pub use legacy::{LegacyCompletionAdapter, LEGACY_ADAPTER_NAME};
pub use messages::{strip_code_fences, MessageCompletionAdapter, MESSAGE_ADAPTER_NAME};
pub use types::{
    CompletionChoice, ContentBlock, LegacyCompletionRequest, LegacyCompletionResponse, Message,
    MessageRequest, MessageResponse,
};

use crate::domain::models::{AdapterKind, Config};
use crate::domain::ports::{CompletionAdapter, HttpTransport};

/// Build the adapter selected by `config.adapter`.
///
/// A missing credential is not rejected here: the adapter reports
/// `MissingCredential` on each `complete` call instead.
pub fn create_adapter(
    config: &Config,
    transport: Arc<dyn HttpTransport>,
) -> Box<dyn CompletionAdapter> {
    let credential = config.credential.clone().unwrap_or_default();

    match config.adapter {
        AdapterKind::Legacy => Box::new(LegacyCompletionAdapter::with_config(
            config.legacy.clone(),
            config.prompt.clone(),
            credential,
            transport,
        )),
        AdapterKind::Messages => Box::new(MessageCompletionAdapter::with_config(
            config.messages.clone(),
            config.prompt.clone(),
            credential,
            transport,
        )),
    }
}
