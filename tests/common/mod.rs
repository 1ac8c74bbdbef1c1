//! Common test utilities for integration tests
//!
//! Provides an in-memory transport that records every request and answers
//! with a fixed reply, plus canned upstream payloads.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vterm::domain::errors::TransportError;
use vterm::domain::ports::{HttpTransport, JsonRequest};

/// Transport double that counts calls and keeps the requests it saw
#[derive(Clone)]
pub struct CountingTransport {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<JsonRequest>>>,
    reply: Result<Value, TransportError>,
}

#[allow(dead_code)]
impl CountingTransport {
    pub fn replying(reply: Value) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Ok(reply),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Err(error),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<JsonRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> JsonRequest {
        self.requests().pop().expect("transport was never called")
    }
}

#[async_trait]
impl HttpTransport for CountingTransport {
    async fn post_json(&self, request: JsonRequest) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

/// Legacy completion reply whose first choice carries `text`
#[allow(dead_code)]
pub fn legacy_reply(text: &str) -> Value {
    json!({
        "id": "cmpl-1",
        "choices": [
            {"text": text, "logprobs": null, "finish_reason": "stop"},
            {"text": "second choice", "logprobs": null, "finish_reason": "stop"}
        ],
        "usage": {"total_tokens": 42}
    })
}

/// Messages reply whose first content block carries `text`
#[allow(dead_code)]
pub fn message_reply(text: &str) -> Value {
    json!({
        "id": "msg_01ABC123",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-opus-20240229",
        "content": [
            {"type": "text", "text": text},
            {"type": "text", "text": "second block"}
        ],
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {"input_tokens": 10, "output_tokens": 3}
    })
}
