//! Domain layer for the virtual terminal
//!
//! This module contains the history model, prompt template, configuration
//! values, error taxonomy and the port traits adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{CompletionError, TransportError};
