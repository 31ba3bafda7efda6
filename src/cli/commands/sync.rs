//! Sync command implementation
//!
//! This module implements the `sync` command: one synchronization batch
//! over the given order identifiers. This is the scheduler collaborator's
//! entry point when Meridian is driven from the command line.

use crate::adapters::netsuite::OAuthTokenProvider;
use crate::adapters::store::PgOrderStore;
use crate::config::load_config;
use crate::core::sync::SyncCoordinator;
use crate::domain::OrderId;
use clap::Args;
use std::str::FromStr;
use std::sync::Arc;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Order identifier(s) to synchronize (comma-separated)
    #[arg(long, value_name = "IDS")]
    pub order_id: String,

    /// Dry run mode - build payloads without calling NetSuite or writing
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    /// Execute the sync command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting sync command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply dry-run flag from CLI
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        // Parse order identifiers, skipping blanks
        let order_ids: Vec<OrderId> = self
            .order_id
            .split(',')
            .map(str::trim)
            .filter_map(|id| match OrderId::from_str(id) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(order_id = %id, error = %e, "Skipping invalid order id");
                    None
                }
            })
            .collect();

        if order_ids.is_empty() {
            eprintln!("❌ No valid order identifiers given");
            return Ok(2);
        }

        // Connect to the source store
        let store = match PgOrderStore::connect(&config.store).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(error = %e, "Failed to connect to source store");
                eprintln!("❌ Failed to connect to source store: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Token provider for the batch
        let token_provider = Arc::new(OAuthTokenProvider::new(&config.netsuite)?);

        // Run the batch
        let coordinator =
            SyncCoordinator::new(config, store.clone(), store, token_provider)?;
        let summary = coordinator.execute_batch(&order_ids).await;
        summary.log_summary();

        println!();
        println!("Synchronization batch finished");
        println!("  Requested:           {}", summary.total_requested);
        println!("  Fetched:             {}", summary.total_fetched);
        println!("  Successful:          {}", summary.successful);
        println!("  Failed:              {}", summary.failed);
        println!("  Write-back failures: {}", summary.write_back_failures);
        if summary.skipped_dry_run > 0 {
            println!("  Skipped (dry run):   {}", summary.skipped_dry_run);
        }

        Ok(if summary.is_successful() { 0 } else { 1 })
    }
}
