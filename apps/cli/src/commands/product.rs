//! # Product Commands
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add Product Flow                                     │
//! │                                                                         │
//! │  stockpad add --image img1 --name Pen --amount 10                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  inventory.add(draft)                                                  │
//! │       │                                                                 │
//! │       ├── ValidationError ──► ApiError (nothing stored)                │
//! │       │                                                                 │
//! │       ├── flushed ──────────► "Added PRODUCT-Pen at index 0"           │
//! │       │                                                                 │
//! │       └── flush failed ─────► retry once ──► still failing? warning    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use stockpad_core::{Product, ProductDraft};
use stockpad_db::KeyValueStore;

use crate::commands::CommandOutput;
use crate::error::ApiError;
use crate::state::{Inventory, Mutation};

/// Product as printed by `--json`, with its current list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub index: usize,
    pub image_ref: String,
    pub name: String,
    pub amount: String,
}

impl ProductDto {
    pub fn new(index: usize, product: Product) -> Self {
        ProductDto {
            index,
            image_ref: product.image_ref,
            name: product.name,
            amount: product.amount,
        }
    }
}

/// One listing line, using the labels the product grid shows.
pub fn format_product_line(index: usize, product: &Product) -> String {
    format!(
        "{}. PRODUCT-{}  AMOUNT-${}  [{}]",
        index, product.name, product.amount, product.image_ref
    )
}

pub async fn add_product<S: KeyValueStore>(
    inventory: &Inventory<S>,
    draft: ProductDraft,
    json: bool,
) -> Result<CommandOutput, ApiError> {
    debug!(name = %draft.name, "add_product called");

    let mutation = inventory.add(draft).await?;
    let warning = settle(inventory, &mutation).await;

    let stdout = if json {
        serde_json::to_string_pretty(&ProductDto::new(mutation.index, mutation.product))?
    } else {
        format!(
            "Added PRODUCT-{} at index {}",
            mutation.product.name, mutation.index
        )
    };

    Ok(with_warning(CommandOutput::new(stdout), warning))
}

pub async fn remove_product<S: KeyValueStore>(
    inventory: &Inventory<S>,
    index: usize,
    json: bool,
) -> Result<CommandOutput, ApiError> {
    debug!(index, "remove_product called");

    let mutation = inventory.remove(index).await?;
    let warning = settle(inventory, &mutation).await;

    let stdout = if json {
        serde_json::to_string_pretty(&ProductDto::new(mutation.index, mutation.product))?
    } else {
        format!(
            "Removed PRODUCT-{} from index {}",
            mutation.product.name, mutation.index
        )
    };

    Ok(with_warning(CommandOutput::new(stdout), warning))
}

pub async fn search_products<S: KeyValueStore>(
    inventory: &Inventory<S>,
    query: &str,
    json: bool,
) -> Result<CommandOutput, ApiError> {
    let hits = inventory.search_with_index(query).await;
    debug!(query = %query, count = hits.len(), "search_products returned");

    if hits.is_empty() && !json {
        let message = if query.is_empty() {
            "No products yet.".to_string()
        } else {
            format!("No products match '{}'.", query)
        };
        return Ok(CommandOutput::new(message));
    }

    render(hits, json)
}

pub async fn list_products<S: KeyValueStore>(
    inventory: &Inventory<S>,
    json: bool,
) -> Result<CommandOutput, ApiError> {
    search_products(inventory, "", json).await
}

fn render(hits: Vec<(usize, Product)>, json: bool) -> Result<CommandOutput, ApiError> {
    if json {
        let dtos: Vec<ProductDto> = hits
            .into_iter()
            .map(|(index, product)| ProductDto::new(index, product))
            .collect();
        return Ok(CommandOutput::new(serde_json::to_string_pretty(&dtos)?));
    }

    let lines: Vec<String> = hits
        .iter()
        .map(|(index, product)| format_product_line(*index, product))
        .collect();
    Ok(CommandOutput::new(lines.join("\n")))
}

/// Retries a failed flush once. Returns a warning if storage is still behind.
async fn settle<S: KeyValueStore>(inventory: &Inventory<S>, mutation: &Mutation) -> Option<String> {
    if mutation.is_persisted() {
        return None;
    }

    match inventory.flush().await {
        Ok(()) => None,
        Err(e) => {
            warn!(error = %e, "Change kept in memory only");
            Some(format!("change not saved: {}", e))
        }
    }
}

fn with_warning(output: CommandOutput, warning: Option<String>) -> CommandOutput {
    match warning {
        Some(w) => output.warn(w),
        None => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockpad_db::{DbError, DbResult, MemoryKvStore, PersistenceBridge};

    async fn inventory() -> Inventory<MemoryKvStore> {
        Inventory::hydrate(PersistenceBridge::new(MemoryKvStore::new())).await
    }

    async fn seeded() -> Inventory<MemoryKvStore> {
        let inventory = inventory().await;
        for (image, name, amount) in [
            ("img1", "Blue Pen", "10"),
            ("img2", "Cup", "5"),
            ("img3", "pencil", "2"),
        ] {
            add_product(&inventory, ProductDraft::new(image, name, amount), false)
                .await
                .unwrap();
        }
        inventory
    }

    #[derive(Debug)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> DbResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> DbResult<()> {
            Err(DbError::QueryFailed("attempt to write a readonly database".into()))
        }
    }

    #[test]
    fn test_format_product_line() {
        let product: Product = ProductDraft::new("file:///pen.jpg", "Pen", "10").into();
        assert_eq!(
            format_product_line(0, &product),
            "0. PRODUCT-Pen  AMOUNT-$10  [file:///pen.jpg]"
        );
    }

    #[tokio::test]
    async fn test_add_reports_index() {
        let inventory = seeded().await;

        let out = add_product(&inventory, ProductDraft::new("img4", "Mug", "1"), false)
            .await
            .unwrap();
        assert_eq!(out.stdout, "Added PRODUCT-Mug at index 3");
        assert!(out.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate() {
        let inventory = seeded().await;

        let err = add_product(&inventory, ProductDraft::new("img4", "CUP", "1"), false)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(inventory.len().await, 3);
    }

    #[tokio::test]
    async fn test_remove_out_of_range() {
        let inventory = seeded().await;

        let err = remove_product(&inventory, 3, false).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_remove_then_list_shows_shifted_indices() {
        let inventory = seeded().await;

        let out = remove_product(&inventory, 1, false).await.unwrap();
        assert_eq!(out.stdout, "Removed PRODUCT-Cup from index 1");

        let out = list_products(&inventory, false).await.unwrap();
        assert_eq!(
            out.stdout,
            "0. PRODUCT-Blue Pen  AMOUNT-$10  [img1]\n1. PRODUCT-pencil  AMOUNT-$2  [img3]"
        );
    }

    #[tokio::test]
    async fn test_search_keeps_list_indices() {
        let inventory = seeded().await;

        let out = search_products(&inventory, "PEN", true).await.unwrap();
        let hits: Vec<serde_json::Value> = serde_json::from_str(&out.stdout).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0]["index"], 0);
        assert_eq!(hits[0]["imageRef"], "img1");
        assert_eq!(hits[1]["index"], 2);
        assert_eq!(hits[1]["name"], "pencil");
    }

    #[tokio::test]
    async fn test_empty_results() {
        let inventory = inventory().await;

        let out = list_products(&inventory, false).await.unwrap();
        assert_eq!(out.stdout, "No products yet.");

        let out = search_products(&inventory, "pen", false).await.unwrap();
        assert_eq!(out.stdout, "No products match 'pen'.");

        let out = list_products(&inventory, true).await.unwrap();
        assert_eq!(out.stdout, "[]");
    }

    #[tokio::test]
    async fn test_unsaved_change_is_reported_as_warning() {
        let inventory = Inventory::hydrate(PersistenceBridge::new(ReadOnlyStore)).await;

        let out = add_product(&inventory, ProductDraft::new("img1", "Pen", "10"), false)
            .await
            .unwrap();

        assert_eq!(out.stdout, "Added PRODUCT-Pen at index 0");
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].starts_with("change not saved"));
        assert_eq!(inventory.len().await, 1);
    }
}
