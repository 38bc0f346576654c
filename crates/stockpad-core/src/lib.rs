//! # stockpad-core: Pure Product Store Logic
//!
//! This crate is the **heart** of Stockpad. It owns the in-memory product
//! list and every rule applied to it, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockpad Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (CLI)                           │   │
//! │  │         add ──► remove ──► search ──► list                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockpad-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌───────────┐               │   │
//! │  │   │   types   │  │    store     │  │ validation│               │   │
//! │  │   │  Product  │  │ ProductStore │  │   rules   │               │   │
//! │  │   │   Draft   │  │ add / remove │  │  checks   │               │   │
//! │  │   └───────────┘  └──────────────┘  └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockpad-db (Persistence Layer)                 │   │
//! │  │            key-value storage, JSON codec, flush/load            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft)
//! - [`store`] - The in-memory product list and its operations
//! - [`error`] - Domain error types
//! - [`validation`] - Field and list validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use stockpad_core::{ProductDraft, ProductStore};
//!
//! let mut store = ProductStore::new();
//! store.add(ProductDraft::new("file:///pen.jpg", "Pen", "10")).unwrap();
//!
//! // Names are unique regardless of case
//! assert!(store.add(ProductDraft::new("file:///pen2.jpg", "PEN", "5")).is_err());
//! assert_eq!(store.search("pe").len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, IndexError, ValidationError};
pub use store::ProductStore;
pub use types::*;
