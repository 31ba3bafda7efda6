//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Meridian configuration file without touching the network.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing
        let config = match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                config
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Environment: {:?}", config.environment);
        println!("  NetSuite Endpoint: {}", config.netsuite.endpoint);
        println!("  Token Endpoint: {}", config.netsuite.token_url);
        println!("  Callout Timeout: {}s", config.netsuite.timeout_seconds);
        println!("  Store Pool Size: {}", config.store.max_connections);

        Ok(0)
    }
}
