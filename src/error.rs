// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.
//!
//! Every network call and every persisted-state operation returns
//! [`Result`]. Lookup misses in the account directory are reported as
//! `Ok(false)`, not as errors.

use crate::storage::StorageError;
use reqwest::StatusCode;

/// Application error type for everything the client can fail at.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401. The session has already been cleared and
    /// the navigator asked to show the login page.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Any other non-2xx response.
    #[error("{message}")]
    Http { status: StatusCode, message: String },

    /// Transport failure (DNS, refused connection, TLS, ...).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body does not match the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Input rejected before anything was sent.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The operation needs a stored token and there is none.
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Message used when an error body cannot be parsed at all.
    pub const NETWORK_ERROR_MESSAGE: &'static str = "Network error";

    /// The human-readable message, without any prefix for HTTP errors.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of the failed response, if the error came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// True if the session was rejected (or was never there).
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. } | ApiError::NotAuthenticated
        )
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .next()
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{}: {}", field, detail)
            })
            .collect();
        fields.sort();
        ApiError::Validation(fields.join(", "))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_bare_message() {
        let err = ApiError::Http {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.message(), "Invalid credentials");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_unauthorized_reports_401() {
        let err = ApiError::Unauthorized {
            message: "Token expired".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert!(err.is_auth_error());
        assert!(ApiError::NotAuthenticated.is_auth_error());
    }

    #[test]
    fn test_local_errors_have_no_status() {
        assert_eq!(ApiError::Validation("x".into()).status(), None);
        assert_eq!(ApiError::MalformedResponse("x".into()).status(), None);
    }
}
