//! Error normalization: any failure → one localized [`ErrorReport`].
//!
//! Classification is an ordered heuristic over the available diagnostic
//! signal: the transport error's own classification first, then substring
//! checks on the diagnostic text, then the structured server detail. The
//! substring checks are a documented known limitation, kept behind this
//! interface so a structured error-code contract from the backend could
//! replace them without touching callers: a server rejection whose detail
//! happens to contain the word "network" classifies as `NetworkDegraded`,
//! not `ServerRejected`.

use tracing::debug;

use vanakkam_core::{ErrorCategory, ErrorReport};

use crate::chat::ChatError;

/// The server could not be reached at all.
const UNREACHABLE_MESSAGE: &str =
    "சேவையகத்துடன் தொடர்பு கொள்ள முடியவில்லை. சேவையகம் இயங்குகிறதா என சரிபார்க்கவும்.";
/// The backend's API usage limit is exhausted.
const QUOTA_MESSAGE: &str = "API வரம்பு முடிந்துவிட்டது. சிறிது நேரம் கழித்து முயற்சிக்கவும்.";
/// Generic connectivity problem.
const NETWORK_MESSAGE: &str =
    "இணையதள இணைப்பில் சிக்கல். தயவுசெய்து உங்கள் இணைப்பை சரிபார்க்கவும்.";
/// Nothing matched.
const UNKNOWN_MESSAGE: &str = "எதிர்பாராத பிழை ஏற்பட்டது. மீண்டும் முயற்சிக்கவும்.";

/// Normalize a transport or server failure into a localized report.
///
/// Pure — inspects only the signal already obtained; performs no I/O. The
/// mapping is total: every failure yields exactly one category, and every
/// category has a message.
#[must_use]
pub fn normalize(error: &ChatError) -> ErrorReport {
    let diagnostic = error.to_string();

    if is_unreachable(error) {
        return report(ErrorCategory::ConnectionUnreachable, UNREACHABLE_MESSAGE, diagnostic);
    }

    let lowered = diagnostic.to_lowercase();
    if lowered.contains("quota") || lowered.contains("limit") {
        return report(ErrorCategory::QuotaExceeded, QUOTA_MESSAGE, diagnostic);
    }
    if lowered.contains("network") || lowered.contains("connection") {
        return report(ErrorCategory::NetworkDegraded, NETWORK_MESSAGE, diagnostic);
    }

    if let ChatError::Api {
        detail: Some(detail),
        ..
    } = error
    {
        debug!(detail = %detail, "server rejection passed through verbatim");
        return ErrorReport {
            category: ErrorCategory::ServerRejected,
            message: detail.clone(),
            cause: Some(diagnostic),
        };
    }

    report(ErrorCategory::Unknown, UNKNOWN_MESSAGE, diagnostic)
}

/// Whether the transport never reached the server at all.
///
/// Connect failures cover refused connections and DNS resolution; timeouts
/// count as unreachable because no response was obtained either.
fn is_unreachable(error: &ChatError) -> bool {
    match error {
        ChatError::Http(e) => e.is_connect() || e.is_timeout(),
        ChatError::Api { .. } | ChatError::Parse(_) => false,
    }
}

fn report(category: ErrorCategory, message: &str, cause: String) -> ErrorReport {
    ErrorReport {
        category,
        message: message.to_string(),
        cause: Some(cause),
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    fn api_error(status: StatusCode, detail: Option<&str>) -> ChatError {
        ChatError::Api {
            status,
            detail: detail.map(String::from),
        }
    }

    #[test]
    fn test_quota_vocabulary_beats_server_detail() {
        let err = api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("Gemini API quota exhausted"),
        );
        let report = normalize(&err);
        assert_eq!(report.category, ErrorCategory::QuotaExceeded);
        assert_eq!(report.message, QUOTA_MESSAGE);
    }

    #[test]
    fn test_rate_limit_vocabulary_is_quota() {
        let err = api_error(StatusCode::TOO_MANY_REQUESTS, Some("rate limit reached"));
        assert_eq!(normalize(&err).category, ErrorCategory::QuotaExceeded);
    }

    #[test]
    fn test_vocabulary_is_case_insensitive() {
        let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, Some("QUOTA exceeded"));
        assert_eq!(normalize(&err).category, ErrorCategory::QuotaExceeded);
    }

    #[test]
    fn test_network_vocabulary_degraded() {
        let err = api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("upstream network unstable"),
        );
        let report = normalize(&err);
        assert_eq!(report.category, ErrorCategory::NetworkDegraded);
        assert_eq!(report.message, NETWORK_MESSAGE);
    }

    #[test]
    fn test_structured_detail_rejected_verbatim() {
        let err = api_error(
            StatusCode::BAD_REQUEST,
            Some("Message cannot be empty"),
        );
        let report = normalize(&err);
        assert_eq!(report.category, ErrorCategory::ServerRejected);
        assert_eq!(report.message, "Message cannot be empty");
        assert_eq!(report.cause.as_deref(), Some("Message cannot be empty"));
    }

    #[test]
    fn test_detail_less_rejection_is_unknown() {
        let err = api_error(StatusCode::SERVICE_UNAVAILABLE, None);
        let report = normalize(&err);
        assert_eq!(report.category, ErrorCategory::Unknown);
        assert_eq!(report.message, UNKNOWN_MESSAGE);
        // The synthesized status text survives for logs.
        assert_eq!(
            report.cause.as_deref(),
            Some("Server error: 503 Service Unavailable")
        );
    }

    #[test]
    fn test_malformed_success_body_is_unknown() {
        let err = ChatError::Parse("missing field `response`".to_string());
        let report = normalize(&err);
        assert_eq!(report.category, ErrorCategory::Unknown);
        assert!(report.cause.expect("cause").contains("response"));
    }

    #[test]
    fn test_every_category_has_a_message() {
        // The localized messages are fixed per category; a report never
        // leaves the normalizer with an empty message.
        for err in [
            api_error(StatusCode::INTERNAL_SERVER_ERROR, Some("quota")),
            api_error(StatusCode::INTERNAL_SERVER_ERROR, Some("network")),
            api_error(StatusCode::INTERNAL_SERVER_ERROR, Some("rejected")),
            api_error(StatusCode::INTERNAL_SERVER_ERROR, None),
        ] {
            assert!(!normalize(&err).message.is_empty());
        }
    }
}
