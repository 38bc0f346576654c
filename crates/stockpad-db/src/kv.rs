//! # Key-Value Storage
//!
//! The storage contract the persistence bridge is written against.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    KeyValueStore Implementations                        │
//! │                                                                         │
//! │  PersistenceBridge ──► KeyValueStore                                   │
//! │                           │                                             │
//! │             ┌─────────────┴──────────────┐                              │
//! │             ▼                            ▼                              │
//! │      KvRepository                  MemoryKvStore                        │
//! │      (SQLite kv_store table)       (HashMap, tests / ephemeral)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-key operations only; there are no multi-key transactions.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::DbResult;

/// Asynchronous string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> impl Future<Output = DbResult<Option<String>>> + Send;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// In-memory [`KeyValueStore`].
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// was written through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
