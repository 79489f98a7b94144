//! Error classification for backend calls.
//!
//! Every wrapper returns [`ApiError`]; front-ends decide between an alert,
//! a login prompt or a silent empty state from the variant instead of
//! inspecting HTTP details themselves.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be built from configuration
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    /// Base URL or path could not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to reach the backend
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Missing, expired or rejected access token
    #[error("Not authenticated")]
    Unauthorized,

    /// Resource does not exist
    #[error("{what} not found")]
    NotFound { what: &'static str },

    /// Any other non-success status
    #[error("Backend error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Body did not match the expected shape
    #[error("Unexpected response for {what}: {message}")]
    Decode { what: &'static str, message: String },

    /// The scope the request was bound to went away
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub(crate) fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            ApiError::Timeout {
                duration: timeout_secs,
            }
        } else {
            ApiError::Connection { source: err }
        }
    }

    /// Worth retrying later (network trouble or server-side failure).
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Connection { .. } | ApiError::Timeout { .. } => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// The customer must sign in again.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Short text suitable for an alert dialog.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Connection { .. } => {
                "Impossible de joindre le serveur. Vérifiez votre connexion.".to_string()
            }
            ApiError::Timeout { .. } => "Le serveur met trop de temps à répondre.".to_string(),
            ApiError::Unauthorized => "Votre session a expiré. Veuillez vous reconnecter.".to_string(),
            ApiError::NotFound { .. } => "Élément introuvable.".to_string(),
            ApiError::Status { status, message } if *status < 500 && !message.is_empty() => {
                message.clone()
            }
            ApiError::Cancelled => String::new(),
            _ => "Une erreur est survenue. Veuillez réessayer.".to_string(),
        }
    }

    /// Stable identifier for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl(_) => "invalid_url",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Unauthorized => "unauthorized",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::Cancelled => "cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_transient() {
        let err = ApiError::Status {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert!(err.is_transient());
        assert_eq!(err.error_type(), "status_error");
    }

    #[test]
    fn test_client_errors_surface_backend_message() {
        let err = ApiError::Status {
            status: 422,
            message: "Numéro invalide".to_string(),
        };
        assert!(!err.is_transient());
        assert_eq!(err.user_message(), "Numéro invalide");
    }

    #[test]
    fn test_unauthorized_requires_login() {
        assert!(ApiError::Unauthorized.requires_login());
        assert!(!ApiError::Timeout { duration: 30 }.requires_login());
        assert!(ApiError::Timeout { duration: 30 }.is_transient());
    }
}
