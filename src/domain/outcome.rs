//! Outcome audit record
//!
//! Every synchronization attempt - including a failed write-back after a
//! successful callout - is captured as one append-only outcome record.
//! The audit store never mutates or deletes these.

use crate::domain::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Integration channel name recorded on every outcome
pub const CHANNEL_NETSUITE: &str = "NetSuite";

/// Source-operation label for the order callout
pub const OPERATION_SYNC_ORDER: &str = "sync_order";

/// Source-operation label for the external-identifier write-back
pub const OPERATION_WRITE_BACK: &str = "write_back";

/// One synchronization attempt, as persisted to the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Record identifier
    pub id: Uuid,

    /// Order the attempt belongs to
    pub order_id: OrderId,

    /// Integration channel name (e.g. "NetSuite")
    pub channel: String,

    /// Originating operation name (e.g. "sync_order", "write_back")
    pub operation: String,

    /// Serialized request body sent to the channel
    pub request_body: String,

    /// Response body, or error text for transport failures
    pub response_body: String,

    /// Whether the attempt succeeded
    pub success: bool,

    /// When the outcome was recorded
    pub recorded_at: DateTime<Utc>,
}

impl OutcomeRecord {
    /// Create a new outcome record for an attempt
    pub fn new(
        order_id: OrderId,
        operation: impl Into<String>,
        request_body: impl Into<String>,
        response_body: impl Into<String>,
        success: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            channel: CHANNEL_NETSUITE.to_string(),
            operation: operation.into(),
            request_body: request_body.into(),
            response_body: response_body.into(),
            success,
            recorded_at: Utc::now(),
        }
    }
}
