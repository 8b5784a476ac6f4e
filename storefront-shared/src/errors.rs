//! # Client Error Types
//!
//! Failures the storefront client distinguishes when talking to the backend
//! or the browser.

use thiserror::Error;

use crate::models::FieldErrors;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong between a user action and its outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The stored token was rejected or has expired.
    #[error("Session rejected with status {status}")]
    Unauthorized { status: u16 },

    /// The server answered with structured validation errors.
    #[error("Validation failed")]
    Validation {
        errors: FieldErrors,
        message: Option<String>,
    },

    /// Any other non-success status.
    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Unexpected response: {details}")]
    Decode { details: String },

    /// Browser storage was unavailable or refused the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Create a new network error.
    #[must_use]
    pub fn network<T: Into<String>>(message: T) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new decode error.
    #[must_use]
    pub fn decode<T: Into<String>>(details: T) -> Self {
        Self::Decode {
            details: details.into(),
        }
    }

    /// HTTP status carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request failed before any response arrived.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// The most specific text available for a notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { message } | Self::Http { message, .. } => message.clone(),
            Self::Validation { errors, message } => message
                .clone()
                .or_else(|| {
                    errors
                        .iter()
                        .find_map(|error| error.first_message().map(str::to_string))
                })
                .unwrap_or_else(|| self.to_string()),
            Self::Unauthorized { .. } | Self::Decode { .. } | Self::Storage(_) => self.to_string(),
        }
    }
}

/// Failures of the token store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Local storage is not available in this context.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The stored value could not be written.
    #[error("Storage write failed: {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        assert_eq!(ClientError::Unauthorized { status: 401 }.status(), Some(401));
        assert_eq!(
            ClientError::Http {
                status: 500,
                message: "boom".into()
            }
            .status(),
            Some(500)
        );
        assert_eq!(ClientError::network("offline").status(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ClientError::network("connection refused").to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ClientError::from(StorageError::Unavailable("private mode".into())).to_string(),
            "Storage unavailable: private mode"
        );
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let error = ClientError::Http {
            status: 500,
            message: "Producto no encontrado".into(),
        };
        assert_eq!(error.user_message(), "Producto no encontrado");

        let errors: FieldErrors =
            serde_json::from_str(r#"{"id":["Requerido"]}"#).unwrap();
        let error = ClientError::Validation {
            errors,
            message: None,
        };
        assert_eq!(error.user_message(), "Requerido");
        assert_eq!(ClientError::network("offline").user_message(), "offline");
    }

    #[test]
    fn test_is_network() {
        assert!(ClientError::network("x").is_network());
        assert!(!ClientError::decode("x").is_network());
    }
}
