//! Status command implementation
//!
//! This module implements the `status` command for displaying source-store
//! synchronization state and the most recent integration outcomes.

use crate::adapters::store::traits::{OrderRepository, OutcomeLog};
use crate::adapters::store::PgOrderStore;
use crate::config::load_config;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Number of recent outcomes to display
    #[arg(long, default_value_t = 10)]
    pub limit: i64,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking synchronization status");

        println!("📊 Synchronization Status");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Connect to the source store
        let store = match PgOrderStore::connect(&config.store).await {
            Ok(store) => store,
            Err(e) => {
                println!("❌ Failed to connect to source store");
                println!("   Error: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Order counts
        let counts = match store.sync_state().await {
            Ok(counts) => counts,
            Err(e) => {
                println!("❌ Failed to query synchronization state");
                println!("   Error: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        println!("Orders:");
        println!("  Synchronized: {}", counts.synced);
        println!("  Pending:      {}", counts.pending);
        println!();

        // Recent outcomes
        let outcomes = match store.recent(self.limit).await {
            Ok(outcomes) => outcomes,
            Err(e) => {
                println!("❌ Failed to load recent outcomes");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        if outcomes.is_empty() {
            println!("No synchronization history found.");
            println!("Run 'meridian sync --order-id <IDS>' to synchronize orders.");
            return Ok(0);
        }

        println!("Recent outcomes:");
        for outcome in &outcomes {
            let marker = if outcome.success { "✅" } else { "❌" };
            println!(
                "  {} {} {} {} ({})",
                marker,
                outcome.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                outcome.order_id,
                outcome.operation,
                outcome.channel,
            );
        }

        Ok(0)
    }
}
