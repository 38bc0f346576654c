//! # Validation Module
//!
//! Rules every product in the list must satisfy.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Draft Validation                                   │
//! │                                                                         │
//! │  ProductDraft                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_draft() ─── any field empty? ──► MissingField                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ensure_unique_name() ─── name taken? ──► DuplicateName                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Append to list                                                        │
//! │                                                                         │
//! │  An empty name can't be compared for duplication, so field checks      │
//! │  always run first.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Product, ProductDraft};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects an empty value for `field`.
///
/// Only zero-length values are missing; `"   "` is accepted as entered.
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }

    Ok(())
}

/// Checks that all three fields of a draft are filled in.
///
/// Fields are checked in display order: image, name, amount.
///
/// ## Example
/// ```rust
/// use stockpad_core::validation::validate_draft;
/// use stockpad_core::{ProductDraft, ValidationError};
///
/// let err = validate_draft(&ProductDraft::new("", "Pen", "10")).unwrap_err();
/// assert_eq!(err, ValidationError::MissingField { field: "imageRef" });
/// ```
pub fn validate_draft(draft: &ProductDraft) -> ValidationResult<()> {
    validate_required("imageRef", &draft.image_ref)?;
    validate_required("name", &draft.name)?;
    validate_required("amount", &draft.amount)?;
    Ok(())
}

// =============================================================================
// Name Comparison
// =============================================================================

/// Compares two names ignoring case.
pub fn names_equal(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Rejects `name` if any product in `existing` already uses it.
pub fn ensure_unique_name(existing: &[Product], name: &str) -> ValidationResult<()> {
    if existing.iter().any(|p| p.name_matches(name)) {
        return Err(ValidationError::DuplicateName {
            name: name.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
