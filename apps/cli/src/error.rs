//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockpad                               │
//! │                                                                         │
//! │  Command Function  →  Result<T, ApiError>                               │
//! │                                                                         │
//! │  ValidationError ──────────────► VALIDATION_ERROR                       │
//! │  IndexError ───────────────────► NOT_FOUND                              │
//! │  DbError / PersistenceError ───► STORAGE_ERROR                          │
//! │  ConfigError ──────────────────► CONFIG_ERROR                           │
//! │                                                                         │
//! │  stderr:  error[VALIDATION_ERROR]: name is required                     │
//! │  --json:  {"code":"VALIDATION_ERROR","message":"name is required"}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

use stockpad_core::{CoreError, IndexError, ValidationError};
use stockpad_db::{DbError, PersistenceError};

use crate::config::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "A product named 'pen' already exists"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No product at the given index
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Storage could not be opened, read or written
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<IndexError> for ApiError {
    fn from(err: IndexError) -> Self {
        ApiError::new(ErrorCode::NotFound, err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            CoreError::Index(e) => e.into(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        ApiError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::from(ValidationError::MissingField { field: "name" }).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err: ApiError =
            CoreError::from(IndexError::IndexOutOfRange { index: 4, len: 1 }).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_json_shape() {
        let err = ApiError::validation("name is required");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"code":"VALIDATION_ERROR","message":"name is required"}"#
        );
        assert_eq!(err.to_string(), "error[VALIDATION_ERROR]: name is required");
    }
}
