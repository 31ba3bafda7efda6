//! Configuration management for Meridian.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Meridian uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use meridian::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("meridian.toml")?;
//!
//! // Access configuration sections
//! println!("NetSuite endpoint: {}", config.netsuite.endpoint);
//! println!("Store pool size: {}", config.store.max_connections);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [netsuite]
//! endpoint = "https://integration.example.com/services/order"
//! token_url = "https://integration.example.com/services/token"
//! client_id = "meridian-client"
//! client_secret = "${MERIDIAN_NETSUITE_CLIENT_SECRET}"
//!
//! [store]
//! connection_string = "${MERIDIAN_STORE_CONNECTION_STRING}"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution, or
//! override any loaded value with a `MERIDIAN_<SECTION>_<KEY>` variable.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, Environment, LoggingConfig, MeridianConfig, NetSuiteConfig, StoreConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
