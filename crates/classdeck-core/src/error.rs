//! Error types for classdeck-core

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type alias using classdeck-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in classdeck-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// No auth session is present; the caller must sign in before fetching
    #[error("Not signed in")]
    NotSignedIn,

    /// The server rejected the bearer token; the session has been cleared
    #[error("Unauthorized")]
    Unauthorized,

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Non-2xx API response carrying the server's message text
    #[error("API error: {message} ({status})")]
    Api { status: u16, message: String },

    /// Structured per-field validation errors returned by the server
    #[error("Server validation failed for {} field(s)", .0.len())]
    ServerValidation(BTreeMap<String, String>),

    /// Malformed response envelope (error status in a 2xx body, missing data)
    #[error("Unexpected response payload: {0}")]
    Envelope(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Session or draft store error
    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    /// Message text suitable for verbatim display to the user.
    ///
    /// Server-provided text is surfaced unchanged; everything else falls
    /// back to `Display`.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_user_message_is_verbatim() {
        let error = Error::Api {
            status: 422,
            message: "The given data was invalid.".to_string(),
        };
        assert_eq!(error.user_message(), "The given data was invalid.");
    }

    #[test]
    fn server_validation_counts_fields() {
        let mut fields = BTreeMap::new();
        fields.insert("email".to_string(), "Email is required".to_string());
        fields.insert("phone".to_string(), "Phone is required".to_string());
        let error = Error::ServerValidation(fields);
        assert!(error.to_string().contains("2 field(s)"));
    }
}
