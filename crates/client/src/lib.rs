//! Vanakkam Client - Intent classification and request routing.
//!
//! Client-side dispatcher for the Vanakkam Tamil AI assistant backend. Free
//! text goes in; the keyword classifier picks the skill that should handle it
//! (general chat, storytelling, culture, grammar, or explanation), the
//! transport client posts the request, and any failure is normalized into a
//! bounded taxonomy with a Tamil user-facing message.
//!
//! # Example
//!
//! ```rust,no_run
//! use vanakkam_client::{ClientConfig, Dispatcher};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let dispatcher = Dispatcher::new(&config)?;
//!
//! match dispatcher.dispatch("Tell me a story about a fox").await {
//!     Ok(reply) => assert!(!reply.response.is_empty()),
//!     Err(report) => eprintln!("{report}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! All types here are `Clone + Send + Sync` and hold no mutable state;
//! concurrent independent calls need no locking. There is no cancellation
//! primitive: once started, a call runs to completion (bounded by the
//! configured request timeout). Serializing user-visible effects is the
//! caller's concern.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chat;
pub mod config;
pub mod dispatcher;
pub mod endpoints;
pub mod health;
pub mod intent;
pub mod report;

pub use chat::{ChatClient, ChatError};
pub use config::{ClientConfig, ConfigError};
pub use dispatcher::Dispatcher;
pub use endpoints::Endpoints;
pub use health::HealthProbe;
pub use intent::classify;
pub use report::normalize;

// Re-export the shared types callers handle directly.
pub use vanakkam_core::{
    ChatRequest, ChatResponse, ErrorCategory, ErrorReport, HealthStatus, Intent,
};
