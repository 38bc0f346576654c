//! # stockpad-db: Persistence Layer for Stockpad
//!
//! Durable storage of the product list on the local device.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockpad Data Flow                               │
//! │                                                                         │
//! │  Inventory (after add / remove)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stockpad-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ Persistence   │    │ KeyValueStore │    │  Database    │  │   │
//! │  │   │ Bridge        │───►│ KvRepository  │───►│  (pool.rs)   │  │   │
//! │  │   │ (bridge.rs)   │    │ MemoryKvStore │    │  migrations  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stockpad.db  (kv_store: "products" → JSON array)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use stockpad_db::{Database, DbConfig, PersistenceBridge};
//!
//! let db = Database::new(DbConfig::new("./stockpad.db")).await?;
//! let bridge = PersistenceBridge::new(db.kv());
//! let products = bridge.load_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bridge;
pub mod error;
pub mod kv;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use bridge::{PersistenceBridge, DEFAULT_PRODUCTS_KEY};
pub use error::{DbError, DbResult, PersistenceError, PersistenceResult};
pub use kv::{KeyValueStore, MemoryKvStore};
pub use pool::{Database, DbConfig};
pub use repository::kv::KvRepository;
