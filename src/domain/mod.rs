//! Domain models and types for Meridian.
//!
//! This module contains the core domain models, types, and business rules
//! for the synchronization pipeline.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`OrderId`], [`MilestoneId`], [`LineItemId`])
//! - **Domain models** ([`OrderRecord`], [`MilestoneRecord`], [`LineItemRecord`], [`OutcomeRecord`])
//! - **Error types** ([`MeridianError`], [`NetSuiteError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Meridian uses the newtype pattern for identifiers to prevent mixing
//! different ID kinds:
//!
//! ```rust
//! use meridian::domain::{OrderId, MilestoneId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let order_id = OrderId::new("ORD-123")?;
//! let milestone_id = MilestoneId::new("MS-456")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: OrderId = milestone_id;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod milestone;
pub mod order;
pub mod outcome;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{MeridianError, NetSuiteError, StoreError};
pub use ids::{LineItemId, MilestoneId, OrderId};
pub use milestone::{FeeAmounts, LineItemRecord, MilestoneGraph, MilestoneRecord};
pub use order::{OrderGraph, OrderRecord};
pub use outcome::OutcomeRecord;
pub use result::Result;
