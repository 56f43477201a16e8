//! CLI command implementations.

use thiserror::Error;

use vanakkam_client::{ConfigError, ErrorReport};

pub mod chat;
pub mod classify;
pub mod health;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request failed; displays the localized report message.
    #[error("{0}")]
    Request(#[from] ErrorReport),

    /// The `--skill` argument named no known skill.
    #[error("Invalid skill: {0}. Valid skills: generate, story, culture, grammar, explain")]
    InvalidSkill(String),

    /// The backend did not report itself healthy.
    #[error("backend is not healthy")]
    Unhealthy,
}
