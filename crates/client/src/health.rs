//! Liveness probe for the backend.

use tracing::{debug, instrument};
use url::Url;

use vanakkam_core::HealthStatus;

use crate::config::{ClientConfig, ConfigError};
use crate::endpoints::Endpoints;

/// Probes the backend's liveness resource.
///
/// Independent of the [`crate::Dispatcher`]: the UI polls this on its own
/// schedule and only needs a boolean.
#[derive(Debug, Clone)]
pub struct HealthProbe {
    client: reqwest::Client,
    url: Url,
}

impl HealthProbe {
    /// Create a probe against the configured backend.
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
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self {
            client,
            url: endpoints.health().clone(),
        })
    }

    /// Whether the backend reports itself healthy.
    ///
    /// True only if the liveness call succeeds and the body's status equals
    /// the healthy sentinel. Any transport failure, non-success status, or
    /// unparseable body is false — this never surfaces an error.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> bool {
        match self.check().await {
            Ok(healthy) => healthy,
            Err(error) => {
                debug!(error = %error, "health check failed");
                false
            }
        }
    }

    async fn check(&self) -> Result<bool, reqwest::Error> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "health resource returned failure status");
            return Ok(false);
        }

        let status: HealthStatus = response.json().await?;
        debug!(status = %status.status, "health status received");
        Ok(status.is_healthy())
    }
}
