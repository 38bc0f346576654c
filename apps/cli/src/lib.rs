//! # Stockpad CLI Library
//!
//! Everything behind the `stockpad` binary. `main.rs` only parses arguments
//! and prints; the work happens in [`run`].
//!
//! ## Module Organization
//! ```text
//! stockpad_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── config.rs       ◄─── TOML + env configuration
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── inventory.rs◄─── Product list + write-through flushing
//! ├── commands/
//! │   ├── mod.rs      ◄─── clap definitions & dispatch
//! │   └── product.rs  ◄─── add / remove / search / list
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use stockpad_db::{Database, DbConfig, KeyValueStore, MemoryKvStore, PersistenceBridge};

use commands::{Cli, Command, CommandOutput};
use config::StockpadConfig;
use error::{ApiError, ErrorCode};
use state::Inventory;

/// Runs one invocation of the CLI.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation Lifecycle                              │
/// │                                                                         │
/// │  1. Load Config ─────────── defaults ◄─ TOML file ◄─ STOCKPAD_* env    │
/// │                                                                         │
/// │  2. Initialize Logging ──── RUST_LOG, else logging.filter, to stderr   │
/// │                                                                         │
/// │  3. Open Storage                                                       │
/// │     • --ephemeral: in-memory key-value store                           │
/// │     • otherwise:   SQLite file, WAL mode, migrations applied           │
/// │                                                                         │
/// │  4. Hydrate Inventory ───── unreadable data falls back to empty        │
/// │                                                                         │
/// │  5. Execute Command ─────── every mutation is flushed before return    │
/// │                                                                         │
/// │  6. Close Pool                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<CommandOutput, ApiError> {
    let config = StockpadConfig::load(cli.config)?;
    init_tracing(&config.logging.filter);

    if cli.ephemeral {
        debug!("Using in-memory storage");
        let bridge = PersistenceBridge::with_key(MemoryKvStore::new(), config.storage.key.clone());
        return dispatch(bridge, cli.command, cli.json).await;
    }

    let db_path = config.database_path()?;
    info!(?db_path, "Opening database");

    let db_config = DbConfig::new(db_path).max_connections(config.storage.max_connections);
    let db = Database::new(db_config).await?;
    if !db.health_check().await {
        db.close().await;
        return Err(ApiError::new(
            ErrorCode::StorageError,
            "database opened but does not answer queries",
        ));
    }

    let bridge = PersistenceBridge::with_key(db.kv(), config.storage.key.clone());
    let result = dispatch(bridge, cli.command, cli.json).await;

    db.close().await;
    result
}

async fn dispatch<S: KeyValueStore>(
    bridge: PersistenceBridge<S>,
    command: Command,
    json: bool,
) -> Result<CommandOutput, ApiError> {
    let inventory = Inventory::hydrate(bridge).await;
    commands::execute(&inventory, command, json).await
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Output goes to
/// stderr so `--json` results on stdout stay parseable. Safe to call more
/// than once; later calls are ignored.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn cli(config: &Path, args: &[&str]) -> Cli {
        let mut argv = vec!["stockpad", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn write_config(dir: &Path) -> std::path::PathBuf {
        let mut config = StockpadConfig::default();
        config.storage.database_path = Some(dir.join("stockpad.db"));

        let path = dir.join("stockpad.toml");
        config.save(Some(path.clone())).unwrap();
        path
    }

    #[tokio::test]
    async fn test_products_survive_between_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path());

        run(cli(&config, &["add", "--image", "img1", "--name", "Pen", "--amount", "10"]))
            .await
            .unwrap();
        run(cli(&config, &["add", "--image", "img2", "--name", "Cup", "--amount", "5"]))
            .await
            .unwrap();
        run(cli(&config, &["remove", "0"])).await.unwrap();

        let out = run(cli(&config, &["list"])).await.unwrap();
        assert_eq!(out.stdout, "0. PRODUCT-Cup  AMOUNT-$5  [img2]");
    }

    #[tokio::test]
    async fn test_ephemeral_leaves_database_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path());

        run(cli(
            &config,
            &["--ephemeral", "add", "--image", "img1", "--name", "Pen", "--amount", "10"],
        ))
        .await
        .unwrap();

        assert!(!dir.path().join("stockpad.db").exists());
    }

    #[tokio::test]
    async fn test_duplicate_is_rejected_across_invocations() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path());

        run(cli(&config, &["add", "--image", "img1", "--name", "Pen", "--amount", "10"]))
            .await
            .unwrap();
        let err = run(cli(&config, &["add", "--image", "img9", "--name", "PEN", "--amount", "1"]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockpad.toml");
        std::fs::write(&path, "[storage\nkey = ").unwrap();

        let err = run(cli(&path, &["list"])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
