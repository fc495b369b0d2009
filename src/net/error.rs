//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Only `Unauthorized` is acted on by the client itself (refresh-and-retry).
//! Everything else travels unchanged to the calling screen, which renders
//! `Validation` field maps next to inputs and `message()` as a banner.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use super::types::ErrorBody;

/// HTTP status the API uses for a missing or expired session.
pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Failure of a single API operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the session (HTTP 401).
    #[error("not authenticated")]
    Unauthorized { message: Option<String> },
    /// The server rejected one or more input fields.
    #[error("validation failed")]
    Validation {
        message: Option<String>,
        fields: BTreeMap<String, String>,
    },
    /// Any other non-success status.
    #[error("server error {status}")]
    Server { status: u16, message: Option<String> },
    /// A success response whose body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response by status and error body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let ErrorBody { error, fields } = serde_json::from_str(body).unwrap_or_default();
        if status == STATUS_UNAUTHORIZED {
            return ApiError::Unauthorized { message: error };
        }
        if !fields.is_empty() {
            return ApiError::Validation { message: error, fields };
        }
        ApiError::Server { status, message: error }
    }

    /// Whether this is the session-rejected class handled by the refresh interceptor.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Server-supplied message suitable for a general error banner.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::Validation { message, .. }
            | ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Per-field validation messages, if any.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ApiError::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }
}
