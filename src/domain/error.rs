//! Error types for CarloSphere backend operations.
//!
//! Every user-triggered operation fails in exactly one of three ways: it is
//! rejected locally before any request is made, the server answers with a
//! non-2xx status, or the request/parse itself fails. None of these are
//! retried automatically; all of them end up as inline user-visible text.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Failure modes for operations against the CarloSphere backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected locally; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The server responded with a non-2xx status. The message is the
    /// server-supplied `error` string, or a generic fallback when the
    /// payload carried none.
    #[error("{message}")]
    RequestFailed {
        /// HTTP status code of the response.
        status: u16,
        /// User-facing error text.
        message: String,
    },

    /// The request itself failed (network error, timeout, unparseable body).
    #[error("Error connecting to server")]
    Connectivity {
        /// Underlying cause, kept for diagnostics only.
        detail: String,
    },
}

impl ApiError {
    /// Create a local validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an error for a non-2xx server response.
    #[must_use]
    pub fn request_failed(status: u16, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
        }
    }

    /// Create a connectivity error, preserving the underlying cause for logs.
    #[must_use]
    pub fn connectivity(detail: impl Into<String>) -> Self {
        Self::Connectivity {
            detail: detail.into(),
        }
    }

    /// Returns `true` if this error never reached the network.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::connectivity(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_verbatim() {
        let err = ApiError::validation("Passwords do not match");
        assert_eq!(format!("{}", err), "Passwords do not match");
        assert!(err.is_validation());
    }

    #[test]
    fn test_request_failed_display_uses_server_message() {
        let err = ApiError::request_failed(401, "Invalid credentials");
        assert_eq!(format!("{}", err), "Invalid credentials");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_connectivity_display_is_generic() {
        let err = ApiError::connectivity("dns lookup failed");
        assert_eq!(format!("{}", err), "Error connecting to server");
        match err {
            ApiError::Connectivity { detail } => assert_eq!(detail, "dns lookup failed"),
            _ => panic!("Expected Connectivity variant"),
        }
    }
}
