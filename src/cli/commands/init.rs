//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "meridian.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Meridian configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Write to file
        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set MERIDIAN_NETSUITE_CLIENT_SECRET in your environment");
                println!("  3. Set MERIDIAN_STORE_CONNECTION_STRING in your environment");
                println!("  4. Validate configuration: meridian validate-config");
                println!("  5. Run a batch: meridian sync --order-id <IDS>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Meridian Configuration File
# Order synchronization to NetSuite ERP

# Runtime environment: development, staging, production
environment = "development"

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

# Dry run mode - build payloads without calling NetSuite or writing
dry_run = false

[netsuite]
# Order-synchronization endpoint
endpoint = "https://integration.example.com/services/order"

# OAuth2 token endpoint
token_url = "https://integration.example.com/services/token"

# OAuth2 client credentials
client_id = "meridian-client"
client_secret = "${MERIDIAN_NETSUITE_CLIENT_SECRET}"

# Callout timeout in seconds
timeout_seconds = 60

[store]
# PostgreSQL source store
connection_string = "${MERIDIAN_STORE_CONNECTION_STRING}"
max_connections = 10
ssl_mode = "prefer"

[logging]
local_enabled = true
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_is_parseable_toml() {
        let content = InitArgs::generate_config();
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(&content);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_generated_config_has_expected_sections() {
        let content = InitArgs::generate_config();
        let parsed: toml::Value = toml::from_str(&content).unwrap();
        assert!(parsed.get("application").is_some());
        assert!(parsed.get("netsuite").is_some());
        assert!(parsed.get("store").is_some());
        assert!(parsed.get("logging").is_some());
    }
}
