//! Order domain model
//!
//! The Order is the root of the synchronized record graph. The source store
//! owns these records; Meridian reads them and writes back exactly one field
//! (`netsuite_order_id`) after a successful synchronization.

use crate::domain::ids::OrderId;
use crate::domain::milestone::MilestoneGraph;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commercial Order record as loaded from the source store
///
/// Optional fields are kept raw here; the normalization layer decides the
/// fallback value each field takes on the wire. The customer reference is
/// denormalized onto the order: an individual customer and/or a corporate
/// account, each carrying its own external-system customer identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Source-store identifier
    pub id: OrderId,

    /// Record-type label (e.g. "Enrollment")
    pub record_type: Option<String>,

    /// Order status
    pub status: Option<String>,

    /// Human-facing order number
    pub order_number: Option<String>,

    /// External customer identifier of the individual customer
    pub customer_external_id: Option<String>,

    /// External customer identifier of the corporate account
    pub corporate_external_id: Option<String>,

    /// Corporate company email
    pub company_email: Option<String>,

    /// Owning subsidiary code
    pub subsidiary: Option<String>,

    /// Order effective date
    pub effective_date: Option<DateTime<Utc>>,

    /// Order start date
    pub start_date: Option<DateTime<Utc>>,

    /// Order end date
    pub end_date: Option<DateTime<Utc>>,

    /// Date of joining
    pub joining_date: Option<DateTime<Utc>>,

    /// Academic year label (e.g. "2025-2026")
    pub academic_year: Option<String>,

    /// Location label
    pub location: Option<String>,

    /// Centre code
    pub centre_code: Option<String>,

    /// Primary parent name
    pub primary_parent: Option<String>,

    /// Primary parent mobile number
    pub primary_mobile: Option<String>,

    /// Primary parent email
    pub primary_email: Option<String>,

    /// Employee identifier (corporate-sponsored orders)
    pub employee_id: Option<String>,

    /// Program identifier
    pub program: Option<String>,

    /// Sub-program identifier
    pub sub_program: Option<String>,

    /// Class identifier
    pub class_id: Option<String>,

    /// External identifier assigned by NetSuite.
    /// Empty until the first successful synchronization; write-once.
    pub netsuite_order_id: Option<String>,
}

impl OrderRecord {
    /// Whether this order already carries a NetSuite identifier
    ///
    /// A populated external identifier is never overwritten by a later run.
    pub fn has_external_id(&self) -> bool {
        matches!(&self.netsuite_order_id, Some(id) if !id.trim().is_empty())
    }
}

/// An order together with its synchronizable milestone sub-records
///
/// This is the unit the Record Fetcher returns: refund-type milestones are
/// already filtered out, and milestone/line-item ordering is the fetcher's
/// documented deterministic order.
#[derive(Debug, Clone)]
pub struct OrderGraph {
    /// The order record
    pub order: OrderRecord,

    /// Milestones with their line items, refund types excluded
    pub milestones: Vec<MilestoneGraph>,
}
