//! Domain error types
//!
//! This module defines the error hierarchy for Meridian. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Meridian error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum MeridianError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// NetSuite integration errors
    #[error("NetSuite error: {0}")]
    NetSuite(#[from] NetSuiteError),

    /// Source-store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Token issuance errors
    #[error("Token error: {0}")]
    Token(String),

    /// Synchronization process errors
    #[error("Sync error: {0}")]
    Sync(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// NetSuite-specific errors
///
/// Errors that occur when talking to the NetSuite integration endpoint.
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum NetSuiteError {
    /// Failed to connect to the integration endpoint
    #[error("Failed to connect to NetSuite: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from the endpoint
    #[error("Invalid response from NetSuite: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Source-store specific errors
///
/// Errors that occur when reading order graphs from, or writing external
/// identifiers back to, the PostgreSQL source store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the store
    #[error("Failed to connect to the source store: {0}")]
    ConnectionFailed(String),

    /// A query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A row could not be mapped to a domain record
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// The external-identifier write-back failed
    #[error("Write-back failed for order {order_id}: {message}")]
    WriteBackFailed { order_id: String, message: String },

    /// Appending to the outcome log failed
    #[error("Failed to append outcome record: {0}")]
    OutcomeAppendFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for MeridianError {
    fn from(err: std::io::Error) -> Self {
        MeridianError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MeridianError {
    fn from(err: serde_json::Error) -> Self {
        MeridianError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MeridianError {
    fn from(err: toml::de::Error) -> Self {
        MeridianError::Configuration(format!("TOML parse error: {err}"))
    }
}
