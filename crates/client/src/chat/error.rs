//! Error types for the transport client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling a skill endpoint.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Transport-level failure: the request never produced an HTTP response
    /// (connection refused, DNS failure, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. `detail` is the parsed
    /// rejection detail when the error body carried one; the display
    /// synthesizes a generic text embedding the status otherwise.
    #[error("{}", api_display(.status, .detail))]
    Api {
        /// HTTP status of the rejection.
        status: StatusCode,
        /// Server-provided detail, if the error body was parseable.
        detail: Option<String>,
    },

    /// The server reported success but the envelope was malformed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Server detail verbatim, or a generic text carrying the status.
fn api_display(status: &StatusCode, detail: &Option<String>) -> String {
    detail
        .clone()
        .unwrap_or_else(|| format!("Server error: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_detail_verbatim() {
        let err = ChatError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: Some("Gemini model not initialized".to_string()),
        };
        assert_eq!(err.to_string(), "Gemini model not initialized");
    }

    #[test]
    fn test_api_error_synthesizes_status_text() {
        let err = ChatError::Api {
            status: StatusCode::BAD_GATEWAY,
            detail: None,
        };
        assert_eq!(err.to_string(), "Server error: 502 Bad Gateway");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ChatError::Parse("missing field `response`".to_string());
        assert_eq!(err.to_string(), "parse error: missing field `response`");
    }
}
