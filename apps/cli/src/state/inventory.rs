//! # Inventory State
//!
//! Owns the [`ProductStore`] and flushes it through the
//! [`PersistenceBridge`] after every successful mutation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Lifecycle                                  │
//! │                                                                         │
//! │  hydrate(bridge)                                                       │
//! │     load_all() ──┬── Ok(list) ──────────────► store.load(list)         │
//! │                  └── CorruptData/ReadFailure ► warn!, empty list        │
//! │                                                                         │
//! │  add(draft) / remove(i)                                                │
//! │     lock ─► mutate ─► snapshot ─► save_all(snapshot) ─► unlock         │
//! │                 │                        │                              │
//! │                 └─ Err: nothing changed  └─ Err: change kept, dirty    │
//! │                                                                         │
//! │  search(q) / products()                                                │
//! │     lock ─► clone ─► unlock      (never touches storage)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The store sits behind a `tokio::sync::Mutex` held across the flush, so
//! flushes are issued and completed in mutation order and the last value
//! written is always the latest snapshot.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use stockpad_core::{CoreError, Product, ProductDraft, ProductStore};
use stockpad_db::{KeyValueStore, PersistenceBridge, PersistenceError, PersistenceResult};

/// Outcome of a mutation that was applied in memory.
///
/// `flush_error` is set when the follow-up flush failed. The mutation is
/// kept either way; call [`Inventory::flush`] to retry.
#[derive(Debug)]
pub struct Mutation {
    /// Position the product was added at or removed from.
    pub index: usize,
    pub product: Product,
    pub flush_error: Option<PersistenceError>,
}

impl Mutation {
    /// Returns true if storage now mirrors memory.
    pub fn is_persisted(&self) -> bool {
        self.flush_error.is_none()
    }
}

#[derive(Debug, Default)]
struct InventoryInner {
    store: ProductStore,
    /// Memory holds changes storage doesn't have yet.
    dirty: bool,
}

/// The product store plus its persistence.
#[derive(Debug)]
pub struct Inventory<S> {
    inner: Mutex<InventoryInner>,
    bridge: PersistenceBridge<S>,
}

impl<S: KeyValueStore> Inventory<S> {
    /// Creates an inventory and loads any previously stored list.
    ///
    /// Unreadable or corrupt data never blocks startup: the inventory starts
    /// empty and the stored value is replaced on the next flush.
    pub async fn hydrate(bridge: PersistenceBridge<S>) -> Self {
        let mut store = ProductStore::new();

        match bridge.load_all().await {
            Ok(products) => {
                info!(key = %bridge.key(), count = products.len(), "Inventory hydrated");
                store.load(products);
            }
            Err(e) => {
                warn!(error = %e, "Could not load stored products, starting empty");
            }
        }

        Inventory {
            inner: Mutex::new(InventoryInner {
                store,
                dirty: false,
            }),
            bridge,
        }
    }

    /// Validates and appends a product, then flushes.
    pub async fn add(&self, draft: ProductDraft) -> Result<Mutation, CoreError> {
        let mut inner = self.inner.lock().await;

        let product = inner.store.add(draft)?.clone();
        let index = inner.store.len() - 1;
        debug!(name = %product.name, index, "Product added");

        let flush_error = self.flush_locked(&mut inner).await.err();
        Ok(Mutation {
            index,
            product,
            flush_error,
        })
    }

    /// Removes the product at `index`, then flushes.
    pub async fn remove(&self, index: usize) -> Result<Mutation, CoreError> {
        let mut inner = self.inner.lock().await;

        let product = inner.store.remove(index)?;
        debug!(name = %product.name, index, "Product removed");

        let flush_error = self.flush_locked(&mut inner).await.err();
        Ok(Mutation {
            index,
            product,
            flush_error,
        })
    }

    /// Case-insensitive name search; empty query returns everything.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        self.inner.lock().await.store.search(query)
    }

    /// Search hits paired with their current list index.
    pub async fn search_with_index(&self, query: &str) -> Vec<(usize, Product)> {
        self.inner.lock().await.store.search_with_index(query)
    }

    /// Returns a copy of the full list.
    pub async fn products(&self) -> Vec<Product> {
        self.inner.lock().await.store.snapshot()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.store.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.store.is_empty()
    }

    /// Returns true if the last flush failed and hasn't been retried.
    pub async fn is_dirty(&self) -> bool {
        self.inner.lock().await.dirty
    }

    /// Writes the current list to storage.
    pub async fn flush(&self) -> PersistenceResult<()> {
        let mut inner = self.inner.lock().await;
        self.flush_locked(&mut inner).await
    }

    async fn flush_locked(&self, inner: &mut InventoryInner) -> PersistenceResult<()> {
        let snapshot = inner.store.snapshot();

        match self.bridge.save_all(&snapshot).await {
            Ok(()) => {
                inner.dirty = false;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, count = snapshot.len(), "Flush failed, keeping in-memory list");
                inner.dirty = true;
                Err(e)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
