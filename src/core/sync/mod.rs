//! Synchronization batch orchestration
//!
//! The coordinator drives one batch end to end; the summary reports it.

pub mod coordinator;
pub mod summary;

pub use coordinator::SyncCoordinator;
pub use summary::{SyncError, SyncErrorType, SyncSummary};
