//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VANAKKAM_BASE_URL` - Backend base URL (default: `http://localhost:8000`)
//! - `VANAKKAM_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid base URL {0}: {1}")]
    InvalidBaseUrl(String, String),
}

/// Immutable client configuration.
///
/// Constructed explicitly (or from the environment) and passed into
/// [`crate::Dispatcher`] and [`crate::HealthProbe`] at construction time, so
/// independently configured clients can coexist — e.g. tests pointing at a
/// stub backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL; skill and health paths are joined onto it.
    pub base_url: Url,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL cannot carry path segments
    /// (e.g. `mailto:`-style URLs).
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(
                base_url.to_string(),
                "URL cannot carry path segments".to_string(),
            ));
        }
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(
            get_optional_env("VANAKKAM_BASE_URL"),
            get_optional_env("VANAKKAM_TIMEOUT_SECS"),
        )
    }

    /// Build a configuration from raw variable values.
    fn from_vars(base_url: Option<String>, timeout_secs: Option<String>) -> Result<Self, ConfigError> {
        let raw_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = raw_url
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidBaseUrl(raw_url.clone(), e.to_string()))?;

        let timeout_secs = match timeout_secs {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("VANAKKAM_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = Self::new(base_url)?;
        config.timeout = Duration::from_secs(timeout_secs);
        Ok(config)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_vars(None, None).expect("defaults are valid");
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_explicit_values() {
        let config = ClientConfig::from_vars(
            Some("https://vanakkam.example.com/api".to_string()),
            Some("5".to_string()),
        )
        .expect("valid values");
        assert_eq!(config.base_url.host_str(), Some("vanakkam.example.com"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_invalid_url() {
        let err = ClientConfig::from_vars(Some("not a url".to_string()), None);
        assert!(matches!(err, Err(ConfigError::InvalidBaseUrl(_, _))));
    }

    #[test]
    fn test_rejects_non_base_url() {
        let url: Url = "mailto:someone@example.com".parse().expect("valid URL");
        assert!(matches!(
            ClientConfig::new(url),
            Err(ConfigError::InvalidBaseUrl(_, _))
        ));
    }

    #[test]
    fn test_rejects_invalid_timeout() {
        let err = ClientConfig::from_vars(None, Some("soon".to_string()));
        assert!(matches!(err, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
