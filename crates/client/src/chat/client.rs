//! HTTP client for the Vanakkam skill endpoints.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, instrument};

use vanakkam_core::{ChatRequest, ChatResponse, ErrorBody, Intent};

use crate::config::{ClientConfig, ConfigError};
use crate::endpoints::Endpoints;

use super::error::ChatError;

/// Transport client for the skill endpoints.
///
/// One JSON POST per call, against the locator resolved for the intent. No
/// retries: a single attempt, success or failure, completes the call. Cheap
/// to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl ChatClient {
    /// Create a new client against the configured backend.
    ///
    /// The per-request timeout from the config is applied to every call.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL cannot carry path segments.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let endpoints = Endpoints::new(config)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self { client, endpoints })
    }

    /// Send a message to the skill handling the given intent.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Http`] when no HTTP response was obtained,
    /// [`ChatError::Api`] on a non-success status, and [`ChatError::Parse`]
    /// when a success body lacks the response payload.
    #[instrument(skip(self, message), fields(intent = %intent, message_len = message.len()))]
    pub async fn send(&self, intent: Intent, message: &str) -> Result<ChatResponse, ChatError> {
        let request = ChatRequest::new(message, intent);

        let response = self
            .client
            .post(self.endpoints.url_for(intent).clone())
            .json(&request)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Parse a success envelope or turn a failure status into an error.
    async fn handle_response(response: reqwest::Response) -> Result<ChatResponse, ChatError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            let reply: ChatResponse = serde_json::from_str(&body)
                .map_err(|e| ChatError::Parse(format!("Failed to parse response: {e}")))?;

            debug!(
                reply_len = reply.response.len(),
                has_audio = reply.audio_url.is_some(),
                "reply received"
            );
            Ok(reply)
        } else {
            Err(Self::handle_error_status(status, response).await)
        }
    }

    /// Extract the rejection detail from an error body, if there is one.
    ///
    /// An unparseable or missing body is tolerated: the error then carries no
    /// detail and displays a generic text embedding the status.
    async fn handle_error_status(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ChatError {
        let detail = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail),
            Err(_) => None,
        };

        debug!(status = %status, has_detail = detail.is_some(), "request rejected");
        ChatError::Api { status, detail }
    }
}
