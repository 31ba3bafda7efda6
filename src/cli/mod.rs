//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Meridian using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Meridian - Order synchronization tool
#[derive(Parser, Debug)]
#[command(name = "meridian")]
#[command(version, about, long_about = None)]
#[command(author = "Meridian Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "meridian.toml", env = "MERIDIAN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MERIDIAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synchronize orders into NetSuite
    Sync(commands::sync::SyncArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show synchronization status and recent outcomes
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_sync() {
        let cli = Cli::parse_from(["meridian", "sync", "--order-id", "ORD-1"]);
        assert_eq!(cli.config, "meridian.toml");
        assert!(matches!(cli.command, Commands::Sync(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "meridian",
            "--config",
            "custom.toml",
            "sync",
            "--order-id",
            "ORD-1",
        ]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from([
            "meridian",
            "--log-level",
            "debug",
            "sync",
            "--order-id",
            "ORD-1",
        ]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_sync_multiple_ids() {
        let cli = Cli::parse_from(["meridian", "sync", "--order-id", "ORD-1,ORD-2,ORD-3"]);
        if let Commands::Sync(args) = cli.command {
            assert_eq!(args.order_id, "ORD-1,ORD-2,ORD-3");
        } else {
            panic!("Expected sync command");
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["meridian", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["meridian", "status"]);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["meridian", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
