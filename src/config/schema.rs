//! Configuration schema types
//!
//! This module defines the configuration structure for Meridian. The whole
//! configuration is loaded once per batch and passed explicitly into the
//! pipeline; nothing reads global settings after startup.

use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main Meridian configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeridianConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// NetSuite integration settings
    pub netsuite: NetSuiteConfig,

    /// Source-store (PostgreSQL) settings
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MeridianConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.netsuite.validate(&self.environment)?;
        self.store.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (build payloads, skip the callout and all writes)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// NetSuite integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetSuiteConfig {
    /// Order-synchronization endpoint URL
    pub endpoint: String,

    /// OAuth2 token endpoint URL
    pub token_url: String,

    /// OAuth2 client identifier
    pub client_id: String,

    /// OAuth2 client secret
    /// Stored securely in memory and automatically zeroized on drop
    pub client_secret: SecretString,

    /// Request timeout in seconds for the synchronization callout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// Disabling verification is only acceptable in development and is
    /// rejected by validation in production environments.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl NetSuiteConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("netsuite.endpoint must not be empty".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!(
                "netsuite.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            ));
        }
        if self.token_url.trim().is_empty() {
            return Err("netsuite.token_url must not be empty".to_string());
        }
        if self.client_id.trim().is_empty() {
            return Err("netsuite.client_id must not be empty".to_string());
        }
        if self.client_secret.expose_secret().is_empty() {
            return Err("netsuite.client_secret must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("netsuite.timeout_seconds must be greater than zero".to_string());
        }
        if *environment == Environment::Production && !self.tls_verify {
            return Err(
                "netsuite.tls_verify must be enabled in production environments".to_string(),
            );
        }
        if *environment == Environment::Production && self.endpoint.starts_with("http://") {
            return Err("netsuite.endpoint must use https in production environments".to_string());
        }
        Ok(())
    }
}

impl Default for NetSuiteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://integration.example.com/services/order".to_string(),
            token_url: "https://integration.example.com/services/token".to_string(),
            client_id: String::new(),
            client_secret: crate::config::secret_string(String::new()),
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
        }
    }
}

/// Source-store (PostgreSQL) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// PostgreSQL connection string
    pub connection_string: String,

    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Connection acquisition timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_seconds: u64,

    /// Per-statement timeout in seconds
    #[serde(default = "default_statement_timeout")]
    pub statement_timeout_seconds: u64,

    /// SSL mode: "disable", "prefer", or "require"
    #[serde(default = "default_ssl_mode")]
    pub ssl_mode: String,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.connection_string.trim().is_empty() {
            return Err("store.connection_string must not be empty".to_string());
        }
        if self.max_connections == 0 {
            return Err("store.max_connections must be greater than zero".to_string());
        }
        let valid_modes = ["disable", "prefer", "require"];
        if !valid_modes.contains(&self.ssl_mode.as_str()) {
            return Err(format!(
                "Invalid store.ssl_mode '{}'. Must be one of: {}",
                self.ssl_mode,
                valid_modes.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            connection_string: "postgresql://meridian@localhost:5432/meridian".to_string(),
            max_connections: default_max_connections(),
            connection_timeout_seconds: default_connection_timeout(),
            statement_timeout_seconds: default_statement_timeout(),
            ssl_mode: default_ssl_mode(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation: "daily" or "hourly"
    #[serde(default = "default_rotation")]
    pub local_rotation: String,

    /// Maximum size per log file in megabytes
    #[serde(default = "default_log_max_size")]
    pub local_max_size_mb: u64,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
            local_max_size_mb: default_log_max_size(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

fn default_max_connections() -> usize {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_statement_timeout() -> u64 {
    60
}

fn default_ssl_mode() -> String {
    "prefer".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn default_log_max_size() -> u64 {
    100
}
