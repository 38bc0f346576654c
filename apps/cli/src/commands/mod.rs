//! # Commands Module
//!
//! Command-line surface of Stockpad.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stockpad Commands                                    │
//! │                                                                         │
//! │  PRODUCT (product.rs)                                                  │
//! │  ├── add --image <ref> --name <name> --amount <amount>                 │
//! │  ├── remove <index>                                                    │
//! │  ├── search [query]                                                    │
//! │  └── list                                                              │
//! │                                                                         │
//! │  GLOBAL FLAGS                                                          │
//! │  ├── --config <path>   Config file (env: STOCKPAD_CONFIG)              │
//! │  ├── --ephemeral       In-memory storage, nothing survives exit        │
//! │  └── --json            Machine-readable output                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stockpad_core::ProductDraft;
use stockpad_db::KeyValueStore;

use crate::error::ApiError;
use crate::state::Inventory;

#[derive(Debug, Parser)]
#[command(name = "stockpad", version, about = "Track a local list of products")]
pub struct Cli {
    /// Path to the config file.
    #[arg(long, global = true, env = "STOCKPAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep products in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a product to the end of the list.
    Add {
        /// Image reference (URI or path) of the product picture.
        #[arg(long = "image", default_value = "")]
        image_ref: String,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        amount: String,
    },

    /// Remove the product at a list position (as shown by `list`).
    Remove { index: usize },

    /// Find products whose name contains the query, ignoring case.
    Search {
        #[arg(default_value = "")]
        query: String,
    },

    /// Show every product.
    List,
}

/// What a command prints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Result, for stdout.
    pub stdout: String,

    /// Non-fatal problems, for stderr.
    pub warnings: Vec<String>,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>) -> Self {
        CommandOutput {
            stdout: stdout.into(),
            warnings: Vec::new(),
        }
    }

    pub fn warn(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// Runs one command against the inventory.
pub async fn execute<S: KeyValueStore>(
    inventory: &Inventory<S>,
    command: Command,
    json: bool,
) -> Result<CommandOutput, ApiError> {
    match command {
        Command::Add {
            image_ref,
            name,
            amount,
        } => {
            let draft = ProductDraft::new(image_ref, name, amount);
            product::add_product(inventory, draft, json).await
        }
        Command::Remove { index } => product::remove_product(inventory, index, json).await,
        Command::Search { query } => product::search_products(inventory, &query, json).await,
        Command::List => product::list_products(inventory, json).await,
    }
}
