//! # Error Types
//!
//! Domain-specific error types for stockpad-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockpad-core errors (this file)                                      │
//! │  ├── ValidationError  - Rejected product drafts                        │
//! │  ├── IndexError       - Positional access outside the list             │
//! │  └── CoreError        - Either of the above                            │
//! │                                                                         │
//! │  stockpad-db errors (separate crate)                                   │
//! │  └── PersistenceError - Load/flush failures                            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → InventoryError → ApiError         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is terminal for the call that produced it: the store is
//! left exactly as it was before the call.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A product draft was rejected before touching the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    ///
    /// ## When This Occurs
    /// - No image was picked before saving
    /// - Name or amount input left empty
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Another product already uses this name (compared case-insensitively).
    ///
    /// ## User Workflow
    /// ```text
    /// List: [Pen]
    ///      │
    ///      ▼
    /// add { name: "pen" }
    ///      │
    ///      ▼
    /// DuplicateName { name: "pen" }
    ///      │
    ///      ▼
    /// UI shows: "A product named 'pen' already exists"
    /// ```
    #[error("A product named '{name}' already exists")]
    DuplicateName { name: String },
}

// =============================================================================
// Index Error
// =============================================================================

/// A positional index did not address an entry of the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Index {index} is out of range for a list of {len} products")]
    IndexOutOfRange { index: usize, len: usize },
}

// =============================================================================
// Core Error
// =============================================================================

/// Any failure of a [`ProductStore`](crate::ProductStore) mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

// =============================================================================
// Unit Tests
// =============================================================================
