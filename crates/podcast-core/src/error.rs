//! Unified application error types.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the `?` operator. Infrastructure failures keep
//! the original cause in `source` for logging while the `message` stays
//! safe to show to callers.

use std::fmt;
use thiserror::Error;

/// Generic message returned to callers for any infrastructure failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error occurred.";

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Authentication failed (unknown credentials, invalid token).
    Authentication,
    /// The caller does not have permission to perform the action.
    Authorization,
    /// Input validation failed before any mutation.
    Validation,
    /// A uniqueness conflict (duplicate email).
    Conflict,
    /// An infrastructure failure surfaced with a generic message.
    Internal,
    /// A raw database error, raised by stores and remapped by services.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Authorization => write!(f, "AUTHORIZATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified application error.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message, safe to return to clients.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Wrap an infrastructure failure behind `message`.
    ///
    /// The original error is moved into `source` so it can still be
    /// logged; the caller only ever sees `message`.
    pub fn infrastructure(message: impl Into<String>, cause: AppError) -> Self {
        Self::with_source(ErrorKind::Internal, message, cause)
    }

    /// Returns `true` for errors that originate from infrastructure rather
    /// than from a guard or validation check.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Internal
                | ErrorKind::Database
                | ErrorKind::Configuration
                | ErrorKind::Serialization
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::with_source(ErrorKind::Database, format!("Database error: {err}"), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::not_found("Podcast with id 3 not found");
        assert_eq!(err.to_string(), "NOT_FOUND: Podcast with id 3 not found");
    }

    #[test]
    fn test_infrastructure_keeps_cause_but_hides_it() {
        let cause = AppError::database("connection reset by peer");
        let err = AppError::infrastructure(INTERNAL_ERROR_MESSAGE, cause);

        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message, INTERNAL_ERROR_MESSAGE);
        let source = std::error::Error::source(&err).expect("cause retained");
        assert!(source.to_string().contains("connection reset"));
    }

    #[test]
    fn test_clone_drops_source() {
        let err = AppError::infrastructure("boom", AppError::database("db"));
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Internal);
        assert!(cloned.source.is_none());
    }

    #[test]
    fn test_is_infrastructure() {
        assert!(AppError::database("x").is_infrastructure());
        assert!(AppError::internal("x").is_infrastructure());
        assert!(!AppError::validation("x").is_infrastructure());
        assert!(!AppError::not_found("x").is_infrastructure());
    }
}
