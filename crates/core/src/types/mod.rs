//! Core types for the Vanakkam client.
//!
//! This module provides the intent tag, the wire envelopes exchanged with the
//! backend, and the normalized error report shown to users.

pub mod chat;
pub mod intent;
pub mod report;

pub use chat::{ChatRequest, ChatResponse, ErrorBody, HealthStatus};
pub use intent::Intent;
pub use report::{ErrorCategory, ErrorReport};
