//! Error types for Roster SDK operations

use thiserror::Error;

/// Master error type for all Roster operations.
///
/// Local validation failures (`InvalidParameters`, `SessionNotInitialized`)
/// are raised before any request is dispatched. Everything else surfaces a
/// dispatcher or transport outcome verbatim; the SDK never retries on the
/// caller's behalf.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// The dispatcher's admission check rejected the request because the
    /// pending queue already spans the full rate-limit window.
    #[error("Rate limit exceeded: request queue is full")]
    RateLimitExceeded,

    /// The server reported a structured failure.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The response body could not be decoded, and no structured API error
    /// was present either.
    #[error("Failed to parse server response")]
    ResponseParsing,

    /// A network-level failure with no server response to decode.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Local validation failed; nothing was dispatched.
    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },

    /// An operation was invoked before `init_session`.
    #[error("Session not initialized: call init_session first")]
    SessionNotInitialized,

    /// Aggregate outcome of a batch creation that was not fully successful.
    /// Carried even when every sub-request failed.
    #[error(
        "Batch creation not successful: {} created ({:?}), {} failed ({:?})",
        .created_ids.len(),
        .created_ids,
        .failed_ids.len(),
        .failed_ids
    )]
    BatchNotSuccessful {
        created_ids: Vec<String>,
        failed_ids: Vec<String>,
    },
}

/// Result type alias for Roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = RosterError::Api {
            code: 400_201,
            message: "User already exists".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("400201"));
        assert!(msg.contains("User already exists"));
    }

    #[test]
    fn test_rate_limit_error_display() {
        let msg = format!("{}", RosterError::RateLimitExceeded);
        assert!(msg.contains("Rate limit exceeded"));
    }

    #[test]
    fn test_invalid_parameters_display() {
        let err = RosterError::InvalidParameters {
            message: "nickname filter must not be empty".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid parameters"));
        assert!(msg.contains("nickname filter must not be empty"));
    }

    #[test]
    fn test_batch_error_display_lists_counts_and_ids() {
        let err = RosterError::BatchNotSuccessful {
            created_ids: vec!["u1".to_string(), "u2".to_string()],
            failed_ids: vec!["u3".to_string()],
        };
        let msg = format!("{}", err);
        assert!(msg.contains("2 created"));
        assert!(msg.contains("1 failed"));
        assert!(msg.contains("u1"));
        assert!(msg.contains("u3"));
    }

    #[test]
    fn test_batch_error_display_total_failure() {
        let err = RosterError::BatchNotSuccessful {
            created_ids: vec![],
            failed_ids: vec!["u1".to_string(), "u2".to_string()],
        };
        let msg = format!("{}", err);
        assert!(msg.contains("0 created"));
        assert!(msg.contains("2 failed"));
    }

    #[test]
    fn test_transport_error_display() {
        let err = RosterError::Transport {
            message: "connection refused".to_string(),
        };
        assert!(format!("{}", err).contains("connection refused"));
    }

    #[test]
    fn test_session_not_initialized_display() {
        let msg = format!("{}", RosterError::SessionNotInitialized);
        assert!(msg.contains("init_session"));
    }
}
