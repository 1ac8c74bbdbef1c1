//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces the rest of the crate
//! depends on:
//! - CompletionAdapter: one upstream completion protocol
//! - HttpTransport: JSON-over-HTTPS POST capability
//!
//! Infrastructure adapters implement these traits; tests substitute doubles.

pub mod completion_adapter;
pub mod http_transport;

pub use completion_adapter::CompletionAdapter;
pub use http_transport::{HttpTransport, JsonRequest};
