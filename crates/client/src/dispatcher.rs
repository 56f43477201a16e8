//! The dispatch facade: text in, reply or localized report out.

use tracing::{debug, instrument, warn};

use vanakkam_core::{ChatResponse, ErrorReport, Intent};

use crate::chat::ChatClient;
use crate::config::{ClientConfig, ConfigError};
use crate::intent;
use crate::report;

/// Facade over classification, routing, transport, and normalization.
///
/// Holds no mutable state; cheap to clone, and independent instances with
/// different configs can coexist. Every failure along the path funnels
/// through [`report::normalize`] exactly once — callers never receive a raw
/// transport error.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    chat: ChatClient,
}

impl Dispatcher {
    /// Create a dispatcher against the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL cannot carry path segments.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            chat: ChatClient::new(config)?,
        })
    }

    /// Classify the message and send it to the matching skill.
    ///
    /// # Errors
    ///
    /// Returns a localized [`ErrorReport`] for any failure.
    #[instrument(skip(self, text))]
    pub async fn dispatch(&self, text: &str) -> Result<ChatResponse, ErrorReport> {
        let intent = intent::classify(text);
        debug!(intent = %intent, "classified message");
        self.dispatch_as(text, intent).await
    }

    /// Send the message to an explicitly chosen skill, skipping
    /// classification — for callers that already know the intent, e.g. a
    /// "tell me a story" button.
    ///
    /// # Errors
    ///
    /// Returns a localized [`ErrorReport`] for any failure.
    pub async fn dispatch_as(
        &self,
        text: &str,
        intent: Intent,
    ) -> Result<ChatResponse, ErrorReport> {
        self.chat.send(intent, text).await.map_err(|e| {
            let report = report::normalize(&e);
            warn!(
                category = %report.category,
                cause = report.cause.as_deref().unwrap_or_default(),
                "dispatch failed"
            );
            report
        })
    }

    /// Request a story.
    ///
    /// # Errors
    ///
    /// Returns a localized [`ErrorReport`] for any failure.
    pub async fn story(&self, text: &str) -> Result<ChatResponse, ErrorReport> {
        self.dispatch_as(text, Intent::Story).await
    }

    /// Request cultural information.
    ///
    /// # Errors
    ///
    /// Returns a localized [`ErrorReport`] for any failure.
    pub async fn culture(&self, text: &str) -> Result<ChatResponse, ErrorReport> {
        self.dispatch_as(text, Intent::Culture).await
    }

    /// Request grammar help.
    ///
    /// # Errors
    ///
    /// Returns a localized [`ErrorReport`] for any failure.
    pub async fn grammar(&self, text: &str) -> Result<ChatResponse, ErrorReport> {
        self.dispatch_as(text, Intent::Grammar).await
    }

    /// Request an explanation.
    ///
    /// # Errors
    ///
    /// Returns a localized [`ErrorReport`] for any failure.
    pub async fn explain(&self, text: &str) -> Result<ChatResponse, ErrorReport> {
        self.dispatch_as(text, Intent::Explain).await
    }
}
