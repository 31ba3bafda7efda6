//! Source-store abstraction
//!
//! Trait seams for the order record store and the outcome audit log, plus
//! the PostgreSQL implementation.

pub mod postgresql;
pub mod traits;

pub use postgresql::PgOrderStore;
pub use traits::{OrderRepository, OutcomeLog, SyncStateCounts, WriteBack};
