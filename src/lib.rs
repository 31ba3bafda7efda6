// Meridian - Order Synchronization Tool for NetSuite ERP
// Copyright (c) 2025 Meridian Contributors
// Licensed under the MIT License

//! # Meridian - Order Synchronization to NetSuite
//!
//! Meridian mirrors commercial Order records - with their nested payment
//! milestones and milestone line items - from a PostgreSQL source store
//! into NetSuite, one outbound HTTP call per order.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** the order record graph (order → milestones → line items)
//! - **Normalizing** raw fields into the external field vocabulary
//! - **Assembling** one typed synchronization payload per order
//! - **Submitting** payloads over authenticated HTTP and classifying results
//! - **Writing back** the externally assigned identifier, write-once
//! - **Recording** every attempt in an append-only outcome log
//!
//! ## Architecture
//!
//! Meridian follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (fetch, normalize, payload, sync)
//! - [`adapters`] - External integrations (NetSuite, PostgreSQL store)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meridian::adapters::netsuite::OAuthTokenProvider;
//! use meridian::adapters::store::PgOrderStore;
//! use meridian::config::load_config;
//! use meridian::core::sync::SyncCoordinator;
//! use meridian::domain::OrderId;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("meridian.toml")?;
//!
//!     // Connect collaborators
//!     let store = Arc::new(PgOrderStore::connect(&config.store).await?);
//!     let tokens = Arc::new(OAuthTokenProvider::new(&config.netsuite)?);
//!
//!     // Run one batch
//!     let coordinator = SyncCoordinator::new(config, store.clone(), store, tokens)?;
//!     let summary = coordinator
//!         .execute_batch(&[OrderId::new("ORD-1")?])
//!         .await;
//!
//!     println!("Synchronized {} orders", summary.successful);
//!     Ok(())
//! }
//! ```
//!
//! ## Batch Semantics
//!
//! One batch is one invocation of
//! [`SyncCoordinator::execute_batch`](core::sync::SyncCoordinator::execute_batch):
//! orders process strictly sequentially, the bearer token is fetched once
//! and shared read-only across the batch, and each order receives exactly
//! one attempt per run. No error propagates out of the entry point -
//! outcomes surface through the returned summary, the audit log, and the
//! write-back side effect.
//!
//! ## Error Handling
//!
//! Meridian uses the [`domain::MeridianError`] type for all errors:
//!
//! ```rust,no_run
//! use meridian::domain::MeridianError;
//!
//! fn example() -> Result<(), MeridianError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = meridian::config::load_config("meridian.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Meridian uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting batch");
//! warn!(order_id = "ORD-1", "Order not found, skipping");
//! error!(error = "timeout", "Callout failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
