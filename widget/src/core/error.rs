//! # Common Error Types
//!
//! Consolidated error handling for the widget.
//!
//! ## Error Categories
//!
//! Errors are categorized by where they arise:
//!
//! - **Network**: the transport itself failed (connection refused, timeout,
//!   DNS, malformed body)
//! - **Server**: the backend answered with a non-2xx status
//! - **Validation**: user input rejected before any transport call
//!
//! All three are recovered locally: every error path re-enables input and
//! returns the conversation status to idle. There is no fatal variant.

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the widget.
///
/// Each variant carries enough context to build the user-visible message.
/// The `#[error]` attribute from `thiserror` provides `Display` and `Error`
/// implementations used for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Transport failure before any HTTP status was received.
    ///
    /// Covers connection errors, timeouts, and response bodies that could
    /// not be decoded as the expected JSON shape.
    #[error("network error: {0}")]
    Network(String),

    /// Backend replied with a non-2xx status.
    ///
    /// `detail` is the backend's own `detail` field when the error body
    /// parsed, otherwise a generic message annotated with the HTTP status.
    #[error("server error (status {status:?}): {detail}")]
    Server {
        status: Option<u16>,
        detail: String,
    },

    /// User input rejected before reaching the transport layer.
    ///
    /// Never creates a retry record: there is nothing worth re-sending.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenience alias used throughout the widget crate.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Whether a failed send with this error should leave a retry record.
    pub fn retryable(&self) -> bool {
        !matches!(self, AppError::Validation(_))
    }

    /// Text shown to the user in the transcript or a toast.
    ///
    /// Server errors surface the backend's own wording; network failures get
    /// the product's stock connection message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Erreur de connexion. Veuillez réessayer.".to_string(),
            AppError::Server { detail, .. } => detail.clone(),
            AppError::Validation(message) => message.clone(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_not_retryable() {
        assert!(!AppError::Validation("Message requis".to_string()).retryable());
        assert!(AppError::Network("refused".to_string()).retryable());
        assert!(AppError::Server {
            status: Some(500),
            detail: "boom".to_string()
        }
        .retryable());
    }

    #[test]
    fn server_errors_surface_backend_wording() {
        let err = AppError::Server {
            status: Some(500),
            detail: "boom".to_string(),
        };
        assert_eq!(err.user_message(), "boom");
    }

    #[test]
    fn network_errors_use_stock_connection_message() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Erreur de connexion. Veuillez réessayer.");
    }
}
