//! Milestone and line-item domain models
//!
//! A payment milestone is a billing checkpoint under an Order; its line
//! items break the milestone's fee categories down per billing period.
//! Refund-variant milestones are never synchronized.

use crate::domain::ids::{LineItemId, MilestoneId, OrderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Milestone record types that are excluded from synchronization
pub const REFUND_RECORD_TYPES: [&str; 2] = ["Fee_Refunds", "Security_Refunds"];

/// The family of fee-category amounts shared by milestones and line items
///
/// Each category has an individual amount and a corporate-contribution
/// variant. Amounts are kept raw (`Option<f64>`); absent values normalize
/// to `0` at the payload boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeeAmounts {
    pub tuition: Option<f64>,
    pub food: Option<f64>,
    pub transport: Option<f64>,
    pub security_deposit: Option<f64>,
    pub kit: Option<f64>,
    pub admission: Option<f64>,
    pub registration: Option<f64>,
    pub annual: Option<f64>,
    pub daycare: Option<f64>,
    pub other: Option<f64>,
    pub corporate_tuition: Option<f64>,
    pub corporate_food: Option<f64>,
    pub corporate_transport: Option<f64>,
    pub corporate_security_deposit: Option<f64>,
    pub corporate_kit: Option<f64>,
    pub corporate_admission: Option<f64>,
    pub corporate_registration: Option<f64>,
    pub corporate_annual: Option<f64>,
    pub corporate_daycare: Option<f64>,
    pub corporate_other: Option<f64>,
}

/// A payment-milestone record as loaded from the source store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneRecord {
    /// Source-store identifier
    pub id: MilestoneId,

    /// Owning order
    pub order_id: OrderId,

    /// Milestone name
    pub name: Option<String>,

    /// Record-type label; refund variants are excluded from sync
    pub record_type: Option<String>,

    /// Milestone status
    pub status: Option<String>,

    /// Whether the milestone amount has been paid
    pub paid: Option<bool>,

    /// Adjustment amount applied to this milestone
    pub adjustment: Option<f64>,

    /// Free-text remarks for the adjustment
    pub adjustment_remarks: Option<String>,

    /// Backend entity label
    pub backend_entity: Option<String>,

    /// Term start date
    pub term_start: Option<DateTime<Utc>>,

    /// Term end date
    pub term_end: Option<DateTime<Utc>>,

    /// Fee-category amounts for the term
    pub fees: FeeAmounts,
}

impl MilestoneRecord {
    /// Whether this milestone's record type marks it as a refund variant
    pub fn is_refund(&self) -> bool {
        matches!(
            &self.record_type,
            Some(rt) if REFUND_RECORD_TYPES.contains(&rt.as_str())
        )
    }
}

/// A milestone line-item record as loaded from the source store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRecord {
    /// Source-store identifier
    pub id: LineItemId,

    /// Owning milestone
    pub milestone_id: MilestoneId,

    /// Line-item name
    pub name: Option<String>,

    /// Billing-period start date
    pub period_start: Option<DateTime<Utc>>,

    /// Billing-period end date
    pub period_end: Option<DateTime<Utc>>,

    /// Whether the line item is active
    pub active: Option<bool>,

    /// Fee-category amounts scoped to the billing period
    pub fees: FeeAmounts,

    /// Adjustment applied in the current month
    pub current_month_adjustment: Option<f64>,

    /// Standard monthly amount
    pub standard_monthly_amount: Option<f64>,
}

/// A milestone together with its line items, in fetch order
#[derive(Debug, Clone)]
pub struct MilestoneGraph {
    /// The milestone record
    pub milestone: MilestoneRecord,

    /// Line items belonging to the milestone
    pub line_items: Vec<LineItemRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone_with_type(record_type: Option<&str>) -> MilestoneRecord {
        MilestoneRecord {
            id: MilestoneId::new("MS-1").unwrap(),
            order_id: OrderId::new("ORD-1").unwrap(),
            name: None,
            record_type: record_type.map(str::to_string),
            status: None,
            paid: None,
            adjustment: None,
            adjustment_remarks: None,
            backend_entity: None,
            term_start: None,
            term_end: None,
            fees: FeeAmounts::default(),
        }
    }

    #[test]
    fn test_fee_refunds_is_refund() {
        assert!(milestone_with_type(Some("Fee_Refunds")).is_refund());
    }

    #[test]
    fn test_security_refunds_is_refund() {
        assert!(milestone_with_type(Some("Security_Refunds")).is_refund());
    }

    #[test]
    fn test_standard_is_not_refund() {
        assert!(!milestone_with_type(Some("Standard")).is_refund());
    }

    #[test]
    fn test_missing_record_type_is_not_refund() {
        assert!(!milestone_with_type(None).is_refund());
    }

    #[test]
    fn test_fee_amounts_default_is_all_absent() {
        let fees = FeeAmounts::default();
        assert!(fees.tuition.is_none());
        assert!(fees.corporate_other.is_none());
    }
}
