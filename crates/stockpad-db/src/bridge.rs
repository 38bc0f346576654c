//! # Persistence Bridge
//!
//! Round-trips the whole product list through a [`KeyValueStore`] under one
//! fixed key.
//!
//! ## Load / Flush Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Persistence Bridge                                   │
//! │                                                                         │
//! │  Startup                                                               │
//! │     load_all() ── get("products") ──┬── None ────────► Ok([])          │
//! │                                     ├── bad JSON ────► CorruptData     │
//! │                                     ├── wrong shape ─► CorruptData     │
//! │                                     └── list ────────► Ok(list)        │
//! │                                                                         │
//! │  After every add / remove                                              │
//! │     save_all(list) ── encode ── set("products", json)                  │
//! │                                     └── rejected ────► WriteFailure    │
//! │                                                                         │
//! │  Always the FULL list, never a diff: after a successful flush the      │
//! │  stored value mirrors memory exactly.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loading checks the shape only. Entries with empty fields or clashing
//! names are returned as stored, so one odd entry never costs the rest of
//! the list.
//!
//! ## Wire Format
//! ```json
//! [{"imageRef":"file:///pen.jpg","name":"Pen","amount":"10"}]
//! ```

use stockpad_core::Product;
use tracing::{debug, info};

use crate::error::{PersistenceError, PersistenceResult};
use crate::kv::KeyValueStore;

/// Default storage key for the product list.
pub const DEFAULT_PRODUCTS_KEY: &str = "products";

// =============================================================================
// Codec
// =============================================================================

/// Serializes a product list to its stored JSON form.
pub fn encode_products(products: &[Product]) -> Result<String, serde_json::Error> {
    serde_json::to_string(products)
}

/// Parses the stored JSON form back into a product list.
///
/// Any string, including an empty one, is accepted for each field.
pub fn decode_products(raw: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(raw)
}

// =============================================================================
// Bridge
// =============================================================================

/// Loads and flushes the product list.
///
/// ## Usage
/// ```rust,ignore
/// let bridge = PersistenceBridge::new(db.kv());
/// let products = bridge.load_all().await.unwrap_or_default();
/// bridge.save_all(&products).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PersistenceBridge<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    /// Creates a bridge using [`DEFAULT_PRODUCTS_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_PRODUCTS_KEY)
    }

    /// Creates a bridge storing the list under `key`.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        PersistenceBridge {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the persisted list.
    ///
    /// ## Returns
    /// - `Ok(vec![])` - nothing stored yet
    /// - `Ok(list)` - stored list, in stored order
    /// - `Err(CorruptData)` - value isn't a JSON array of products
    /// - `Err(ReadFailure)` - storage could not be read
    pub async fn load_all(&self) -> PersistenceResult<Vec<Product>> {
        let raw = self
            .store
            .get(&self.key)
            .await
            .map_err(|source| PersistenceError::ReadFailure {
                key: self.key.clone(),
                source,
            })?;

        let Some(raw) = raw else {
            debug!(key = %self.key, "No stored products");
            return Ok(Vec::new());
        };

        let products =
            decode_products(&raw).map_err(|e| PersistenceError::corrupt(&self.key, e))?;

        info!(key = %self.key, count = products.len(), "Loaded stored products");
        Ok(products)
    }

    /// Overwrites the stored list with `products`.
    pub async fn save_all(&self, products: &[Product]) -> PersistenceResult<()> {
        let raw = encode_products(products).map_err(|e| PersistenceError::WriteFailure {
            key: self.key.clone(),
            source: crate::error::DbError::Internal(e.to_string()),
        })?;

        self.store
            .set(&self.key, &raw)
            .await
            .map_err(|source| PersistenceError::WriteFailure {
                key: self.key.clone(),
                source,
            })?;

        debug!(key = %self.key, count = products.len(), "Flushed products");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
