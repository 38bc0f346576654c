//! # Product Store
//!
//! The authoritative in-memory product list.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Store Operations                             │
//! │                                                                         │
//! │  User Action              Store Method            List Change           │
//! │  ───────────              ────────────            ───────────           │
//! │                                                                         │
//! │  Save Product ───────────► add(draft) ──────────► products.push(p)     │
//! │                                                                         │
//! │  Tap Delete ─────────────► remove(i) ───────────► products.remove(i)   │
//! │                                                                         │
//! │  Type in Search ─────────► search(q) ───────────► (read only)          │
//! │                                                                         │
//! │  App Startup ────────────► load(list) ──────────► products = list      │
//! │                                                                         │
//! │  NOTE: add/remove validate before touching the list. A failed call     │
//! │        leaves the list unchanged.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store does no I/O. Whoever owns it is responsible for flushing the
//! list to storage after each successful `add` or `remove`.

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, ValidationError};
use crate::types::{Product, ProductDraft};
use crate::validation::{ensure_unique_name, validate_draft};

/// Ordered list of products with the uniqueness and completeness rules
/// enforced on every insertion.
///
/// ## Invariants
/// - No two products share a name (ignoring case)
/// - Every product has image_ref, name and amount non-empty
/// - Insertion order is preserved; new products go to the end
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ProductStore {
            products: Vec::new(),
        }
    }

    /// Replaces the whole list, typically with data loaded at startup.
    ///
    /// The list is taken as-is. Stored entries are never dropped or rewritten.
    pub fn load(&mut self, initial: Vec<Product>) {
        self.products = initial;
    }

    /// Validates `draft` and appends it to the end of the list.
    ///
    /// ## Returns
    /// - `Ok(&Product)` - the stored product, now the last entry
    /// - `Err(MissingField)` - a field is empty (checked first)
    /// - `Err(DuplicateName)` - the name is already taken, ignoring case
    pub fn add(&mut self, draft: ProductDraft) -> Result<&Product, ValidationError> {
        validate_draft(&draft)?;
        ensure_unique_name(&self.products, &draft.name)?;

        self.products.push(Product::from(draft));
        let index = self.products.len() - 1;
        Ok(&self.products[index])
    }

    /// Removes the product at `index`, shifting later entries left by one.
    pub fn remove(&mut self, index: usize) -> Result<Product, IndexError> {
        if index >= self.products.len() {
            return Err(IndexError::IndexOutOfRange {
                index,
                len: self.products.len(),
            });
        }

        Ok(self.products.remove(index))
    }

    /// Returns the products whose name contains `query`, ignoring case.
    ///
    /// An empty query returns the full list. Order follows the list.
    pub fn search(&self, query: &str) -> Vec<Product> {
        if query.is_empty() {
            return self.products.clone();
        }

        self.search_with_index(query)
            .into_iter()
            .map(|(_, product)| product)
            .collect()
    }

    /// Like [`search`](Self::search), paired with each hit's current index.
    ///
    /// Indices are only valid until the next mutation.
    pub fn search_with_index(&self, query: &str) -> Vec<(usize, Product)> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .map(|(i, p)| (i, p.clone()))
            .collect()
    }

    /// Returns the product at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Returns the current list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns an owned copy of the current list, for flushing.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(image_ref: &str, name: &str, amount: &str) -> ProductDraft {
        ProductDraft::new(image_ref, name, amount)
    }

    fn store_with(names: &[&str]) -> ProductStore {
        let mut store = ProductStore::new();
        for (i, name) in names.iter().enumerate() {
            store
                .add(draft(&format!("img{}", i), name, &i.to_string()))
                .unwrap();
        }
        store
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut store = ProductStore::new();
        store.add(draft("img1", "Pen", "10")).unwrap();
        let added = store.add(draft("img2", "Cup", "5")).unwrap();

        assert_eq!(added.name, "Cup");
        assert_eq!(names(store.products()), vec!["Pen", "Cup"]);
    }

    #[test]
    fn test_add_duplicate_name_ignoring_case() {
        let mut store = ProductStore::new();
        store.add(draft("img1", "Pen", "10")).unwrap();

        let err = store.add(draft("img2", "pen", "5")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateName {
                name: "pen".to_string()
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.products()[0].amount, "10");
    }

    #[test]
    fn test_add_missing_image_leaves_list_unchanged() {
        let mut store = store_with(&["Cup"]);
        let before = store.clone();

        let err = store.add(draft("", "Pen", "10")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "imageRef" });
        assert_eq!(store, before);
    }

    #[test]
    fn test_missing_field_takes_priority_over_duplicate() {
        let mut store = store_with(&["Pen"]);

        let err = store.add(draft("img", "Pen", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "amount" });
    }

    #[test]
    fn test_add_keeps_values_verbatim() {
        let mut store = ProductStore::new();
        store.add(draft("content://media/42", " Pen ", "0010")).unwrap();

        let stored = store.get(0).unwrap();
        assert_eq!(stored.image_ref, "content://media/42");
        assert_eq!(stored.name, " Pen ");
        assert_eq!(stored.amount, "0010");
    }

    #[test]
    fn test_uniqueness_holds_over_many_adds() {
        let mut store = ProductStore::new();
        let attempts = ["Pen", "pen", "Cup", "CUP", "Mug", "pEn", "Bowl", "mug"];
        for (i, name) in attempts.iter().enumerate() {
            let _ = store.add(draft("img", name, &i.to_string()));
        }

        assert_eq!(names(store.products()), vec!["Pen", "Cup", "Mug", "Bowl"]);
        for (i, a) in store.products().iter().enumerate() {
            for b in &store.products()[i + 1..] {
                assert_ne!(a.name.to_lowercase(), b.name.to_lowercase());
            }
        }
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut store = store_with(&["A", "B", "C"]);

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(names(store.products()), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_preserves_positions_for_every_index() {
        let original = store_with(&["A", "B", "C", "D", "E"]);
        let n = original.len();

        for i in 0..n {
            let mut store = original.clone();
            store.remove(i).unwrap();

            assert_eq!(store.len(), n - 1);
            for j in 0..store.len() {
                let expected = if j < i { j } else { j + 1 };
                assert_eq!(store.get(j), original.get(expected));
            }
        }
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = store_with(&["A", "B"]);

        let err = store.remove(2).unwrap_err();
        assert_eq!(err, IndexError::IndexOutOfRange { index: 2, len: 2 });
        assert_eq!(store.len(), 2);

        let mut empty = ProductStore::new();
        assert!(empty.remove(0).is_err());
    }

    #[test]
    fn test_removed_name_can_be_reused() {
        let mut store = store_with(&["Pen"]);
        store.remove(0).unwrap();
        assert!(store.add(draft("img", "PEN", "3")).is_ok());
    }

    #[test]
    fn test_search_substring_ignoring_case() {
        let store = store_with(&["Blue Pen", "Cup", "pencil", "Open Box"]);

        assert_eq!(
            names(&store.search("PEN")),
            vec!["Blue Pen", "pencil", "Open Box"]
        );
        assert_eq!(names(&store.search("cup")), vec!["Cup"]);
        assert!(store.search("xyz").is_empty());
    }

    #[test]
    fn test_search_with_index_reports_list_positions() {
        let store = store_with(&["Cup", "Pen", "Mug", "pencil"]);

        let hits: Vec<(usize, String)> = store
            .search_with_index("pen")
            .into_iter()
            .map(|(i, p)| (i, p.name))
            .collect();
        assert_eq!(hits, vec![(1, "Pen".to_string()), (3, "pencil".to_string())]);
    }

    #[test]
    fn test_search_empty_query_returns_everything_in_order() {
        let store = store_with(&["C", "A", "B"]);
        assert_eq!(store.search(""), store.products().to_vec());
    }

    #[test]
    fn test_search_does_not_mutate() {
        let store = store_with(&["Pen", "Cup"]);
        let before = store.clone();

        let mut view = store.search("pen");
        view.clear();

        assert_eq!(store, before);
    }

    #[test]
    fn test_load_replaces_list() {
        let mut store = store_with(&["Old"]);
        let loaded = store_with(&["A", "B"]).snapshot();

        store.load(loaded.clone());
        assert_eq!(store.products(), loaded.as_slice());

        // Names from the replaced list are free again, loaded ones are taken
        assert!(store.add(draft("img", "OLD", "1")).is_ok());
        assert!(store.add(draft("img", "a", "1")).is_err());
    }

    #[test]
    fn test_whitespace_fields_are_not_missing() {
        let mut store = ProductStore::new();

        let added = store.add(draft("img", "   ", "1")).unwrap();
        assert_eq!(added.name, "   ");

        store.add(draft(" ", "Pen", "\t")).unwrap();
        assert_eq!(store.len(), 2);
    }
}
