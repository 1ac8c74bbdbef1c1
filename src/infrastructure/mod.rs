//! Infrastructure layer module
//!
//! This module contains the adapters and external integrations:
//! - Completion adapters for the legacy and messages protocols
//! - reqwest HTTP transport
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod completion;
pub mod config;
pub mod http;
pub mod logging;
