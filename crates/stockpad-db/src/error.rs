//! # Persistence Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError ← storage-level failure (pool, query, migration)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PersistenceError ← what the bridge reports for load/flush             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryError / ApiError (in app)                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Storage Errors
// =============================================================================

/// Storage backend errors.
///
/// These wrap sqlx errors and add categorization for logging and user
/// feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Pool was closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Disk full / quota exceeded
    /// - Database locked or read-only
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Persistence Errors
// =============================================================================

/// Failures of a full-list load or flush.
///
/// None of these are fatal to the session: a failed load falls back to an
/// empty list, and a failed flush leaves the in-memory list in place.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The stored value is not a valid product list.
    ///
    /// ## When This Occurs
    /// - Value is not JSON
    /// - Value is not an array of `{imageRef, name, amount}` string objects
    #[error("Stored products under '{key}' are corrupt: {reason}")]
    CorruptData { key: String, reason: String },

    /// The storage layer rejected the write.
    #[error("Failed to write products under '{key}': {source}")]
    WriteFailure {
        key: String,
        #[source]
        source: DbError,
    },

    /// The storage layer could not be read.
    #[error("Failed to read products under '{key}': {source}")]
    ReadFailure {
        key: String,
        #[source]
        source: DbError,
    },
}

impl PersistenceError {
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        PersistenceError::CorruptData {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for bridge operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_error_messages() {
        let err = PersistenceError::corrupt("products", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Stored products under 'products' are corrupt: expected value at line 1 column 1"
        );

        let err = PersistenceError::WriteFailure {
            key: "products".to_string(),
            source: DbError::QueryFailed("database or disk is full".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write products under 'products': Query failed: database or disk is full"
        );
    }
}
