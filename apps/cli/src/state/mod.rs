//! # State Module
//!
//! Application state shared by the commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐                                      │
//! │  │        Inventory<S>          │                                      │
//! │  │                              │                                      │
//! │  │  Mutex<ProductStore>  ───────┼──► PersistenceBridge<S>              │
//! │  │  (single writer)             │      S = KvRepository (SQLite)       │
//! │  │                              │      S = MemoryKvStore (--ephemeral) │
//! │  └──────────────────────────────┘                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod inventory;

pub use inventory::{Inventory, Mutation};
