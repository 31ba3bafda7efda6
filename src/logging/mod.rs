//! Logging and observability
//!
//! Structured logging via `tracing`: console output plus an optional
//! JSON-formatted rolling log file.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
