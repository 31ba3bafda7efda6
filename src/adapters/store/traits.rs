//! Source-store abstraction traits
//!
//! This module defines the traits the source-store adapter must implement.
//! The pipeline only ever touches the store through these seams, which keeps
//! the field contract explicit and lets tests substitute in-memory fakes.

use crate::domain::ids::{MilestoneId, OrderId};
use crate::domain::milestone::{LineItemRecord, MilestoneRecord};
use crate::domain::order::OrderRecord;
use crate::domain::outcome::OutcomeRecord;
use crate::domain::Result;
use async_trait::async_trait;

/// Result of an external-identifier write-back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteBack {
    /// The identifier was written
    Updated,
    /// The order already carried an identifier; nothing was written
    AlreadySet,
}

/// Aggregate synchronization state of the source store
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncStateCounts {
    /// Orders carrying a NetSuite identifier
    pub synced: i64,
    /// Orders not yet synchronized
    pub pending: i64,
}

/// Repository trait for the order record graph
///
/// The source store owns these records; the repository exposes read access
/// plus the single write-back the pipeline performs. Sub-record queries
/// return a documented deterministic order (milestones by term start date
/// then id, line items by period start date then id) so payload assembly is
/// reproducible.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Load one order by identifier
    ///
    /// Returns `Ok(None)` when the identifier does not exist - a missing
    /// order is not an error at this layer.
    async fn find_order(&self, order_id: &OrderId) -> Result<Option<OrderRecord>>;

    /// Load all milestones belonging to an order, refund variants included
    ///
    /// The refund exclusion is applied by the Record Fetcher, not here, so
    /// the rule stays in one testable place.
    async fn milestones_for_order(&self, order_id: &OrderId) -> Result<Vec<MilestoneRecord>>;

    /// Load all line items belonging to a milestone
    async fn line_items_for_milestone(
        &self,
        milestone_id: &MilestoneId,
    ) -> Result<Vec<LineItemRecord>>;

    /// Write the externally assigned identifier back onto an order
    ///
    /// Write-once: the update only applies while the order's external
    /// identifier is empty. Returns [`WriteBack::AlreadySet`] when a
    /// previous run already populated it.
    async fn record_external_id(
        &self,
        order_id: &OrderId,
        external_id: &str,
    ) -> Result<WriteBack>;

    /// Count synchronized and pending orders
    async fn sync_state(&self) -> Result<SyncStateCounts>;
}

/// Append-only audit sink for synchronization outcomes
#[async_trait]
pub trait OutcomeLog: Send + Sync {
    /// Append one outcome record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted. Callers must not
    /// fail the batch over an audit error.
    async fn append(&self, record: &OutcomeRecord) -> Result<()>;

    /// Return the most recent outcome records, newest first
    async fn recent(&self, limit: i64) -> Result<Vec<OutcomeRecord>>;
}
