//! Error types for the EcoFi API client.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The server could not be reached (DNS, refused connection, TLS, ...)
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    /// 5xx response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// 4xx response other than 401. Validation failures carry field errors.
    #[error("Request failed ({status}): {message}")]
    Client {
        status: u16,
        message: String,
        field_errors: BTreeMap<String, Vec<String>>,
    },

    /// 401 that could not be recovered by a refresh, session still present
    #[error("Authentication expired")]
    AuthExpired,

    /// Refresh failed; the session was cleared and logout signalled
    #[error("Session ended, please sign in again")]
    AuthFatal,

    /// The response body did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Invalid request (missing required data, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store or record validation failure
    #[error(transparent)]
    Core(#[from] ecofi_core::Error),
}

/// Error body shapes the backend returns: `{ message }` from controllers and
/// ASP.NET validation problems `{ title, errors: { field: [..] } }`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "Message")]
    message: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn message(&self) -> Option<String> {
        self.message
            .as_deref()
            .or(self.title.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }
}

impl ApiError {
    /// Classifies a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::AuthExpired;
        }

        let parsed = ErrorBody::parse(body);
        let message = parsed.message();

        if status >= 500 {
            return ApiError::Server {
                status,
                message: message.unwrap_or_else(|| "The server encountered an error".to_string()),
            };
        }

        ApiError::Client {
            status,
            message: message.unwrap_or_else(|| format!("Request failed with status {}", status)),
            field_errors: parsed.errors.unwrap_or_default(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } | ApiError::Client { status, .. } => Some(*status),
            ApiError::AuthExpired | ApiError::AuthFatal => Some(401),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Failures worth retrying later by the caller.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::Timeout | ApiError::NetworkUnreachable(_) | ApiError::Server { .. }
        )
    }

    /// The user has been signed out.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ApiError::AuthFatal)
    }

    /// Field errors of a validation failure; empty for anything else.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            ApiError::Client { field_errors, .. } if !field_errors.is_empty() => Some(field_errors),
            _ => None,
        }
    }

    /// Short text suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Timeout => "The request took too long. Please try again.".to_string(),
            ApiError::NetworkUnreachable(_) => {
                "Unable to reach the server. Check your connection.".to_string()
            }
            ApiError::Server { message, .. } | ApiError::Client { message, .. } => message.clone(),
            ApiError::AuthExpired | ApiError::AuthFatal => {
                "Your session has expired. Please log in again.".to_string()
            }
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
            ApiError::InvalidRequest(message) | ApiError::Config(message) => message.clone(),
            ApiError::Core(err) => err.to_string(),
        }
    }
}
