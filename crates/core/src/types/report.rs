//! The normalized error report shown to users.

use serde::{Deserialize, Serialize};

/// Bounded taxonomy of request failures.
///
/// Every failed call normalizes to exactly one category; each category has
/// exactly one localized user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The transport could not reach the server at all.
    ConnectionUnreachable,
    /// The backend's usage or rate limit is exhausted.
    QuotaExceeded,
    /// A generic connectivity problem between client and server.
    NetworkDegraded,
    /// The server rejected the request with a structured detail.
    ServerRejected,
    /// None of the known signals matched.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ConnectionUnreachable => "connection_unreachable",
            Self::QuotaExceeded => "quota_exceeded",
            Self::NetworkDegraded => "network_degraded",
            Self::ServerRejected => "server_rejected",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A failure normalized for presentation.
///
/// `message` is the Tamil user-facing text; `cause` carries the original
/// diagnostic for logging and is never shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Which failure class this is.
    pub category: ErrorCategory,
    /// Localized user-facing message.
    pub message: String,
    /// Original diagnostic detail, for logs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ErrorReport {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_matches_wire_name() {
        let json = serde_json::to_string(&ErrorCategory::QuotaExceeded).expect("serialize");
        assert_eq!(json, format!("\"{}\"", ErrorCategory::QuotaExceeded));
    }

    #[test]
    fn test_report_displays_localized_message() {
        let report = ErrorReport {
            category: ErrorCategory::Unknown,
            message: "எதிர்பாராத பிழை ஏற்பட்டது.".to_string(),
            cause: Some("boom".to_string()),
        };
        assert_eq!(report.to_string(), "எதிர்பாராத பிழை ஏற்பட்டது.");
    }

    #[test]
    fn test_report_serializes_without_empty_cause() {
        let report = ErrorReport {
            category: ErrorCategory::NetworkDegraded,
            message: "msg".to_string(),
            cause: None,
        };
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(!json.contains("cause"));
    }
}
