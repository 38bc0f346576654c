//! # Domain Types
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   validate    ┌─────────────────┐                 │
//! │  │  ProductDraft   │ ────────────► │    Product      │                 │
//! │  │  ─────────────  │               │  ─────────────  │                 │
//! │  │  image_ref      │               │  image_ref      │                 │
//! │  │  name           │               │  name (unique)  │                 │
//! │  │  amount         │               │  amount         │                 │
//! │  └─────────────────┘               └─────────────────┘                 │
//! │   user input, may be empty          stored, all fields non-empty       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positional Identity
//! Products carry no id. A product is addressed by its index in the list,
//! and indices to the right of a removed entry shift down by one.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product
// =============================================================================

/// One inventory entry.
///
/// Values are stored exactly as entered. `amount` is numeric-looking text and
/// is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Opaque handle to a locally picked image (URI or path).
    pub image_ref: String,

    /// Display name, unique across the list ignoring case.
    pub name: String,

    /// Amount as entered by the user.
    pub amount: String,
}

impl Product {
    /// Returns true if this product's name equals `name` ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        crate::validation::names_equal(&self.name, name)
    }
}

impl From<ProductDraft> for Product {
    fn from(draft: ProductDraft) -> Self {
        Product {
            image_ref: draft.image_ref,
            name: draft.name,
            amount: draft.amount,
        }
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// A candidate product as collected from the user, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    #[serde(default)]
    pub image_ref: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub amount: String,
}

impl ProductDraft {
    pub fn new(
        image_ref: impl Into<String>,
        name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        ProductDraft {
            image_ref: image_ref.into(),
            name: name.into(),
            amount: amount.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_names_are_camel_case() {
        let product = Product::from(ProductDraft::new("img1", "Pen", "10"));
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"imageRef":"img1","name":"Pen","amount":"10"}"#);
    }

    #[test]
    fn test_draft_fields_default_to_empty() {
        let draft: ProductDraft = serde_json::from_str(r#"{"name":"Pen"}"#).unwrap();
        assert_eq!(draft.image_ref, "");
        assert_eq!(draft.amount, "");
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let product = Product::from(ProductDraft::new("img1", "Pen", "10"));
        assert!(product.name_matches("PEN"));
        assert!(!product.name_matches("Pencil"));
    }
}
