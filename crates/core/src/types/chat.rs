//! Wire envelopes exchanged with the Vanakkam backend.

use serde::{Deserialize, Serialize};

use super::intent::Intent;

/// Request body for the skill endpoints.
///
/// Serializes as `{"message": ..., "type": ...}`. The `type` field is always
/// sent, including `"generate"` for default chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
    /// Which skill should handle the message.
    #[serde(rename = "type")]
    pub intent: Intent,
}

impl ChatRequest {
    /// Create a request for the given skill.
    #[must_use]
    pub fn new(message: impl Into<String>, intent: Intent) -> Self {
        Self {
            message: message.into(),
            intent,
        }
    }
}

/// Success envelope returned by the skill endpoints.
///
/// The `response` field is the payload; the backend may also attach an audio
/// rendering URL and a server-side timestamp, both passed through opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub response: String,
    /// URL of a text-to-speech rendering, when the backend produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Server-side timestamp of the reply (ISO 8601, uninterpreted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Error envelope returned on a non-success status.
///
/// The backend sends `{"detail": "..."}`; both the field and the body itself
/// may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable rejection detail, when the server provided one.
    #[serde(default)]
    pub detail: Option<String>,
}

/// Body of the liveness resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Reported status; the healthy sentinel is [`HealthStatus::HEALTHY`].
    pub status: String,
}

impl HealthStatus {
    /// Sentinel value the backend reports when fully operational.
    pub const HEALTHY: &'static str = "healthy";

    /// Whether the reported status equals the healthy sentinel.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == Self::HEALTHY
    }
}
