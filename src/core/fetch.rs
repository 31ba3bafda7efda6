//! Record fetching
//!
//! The Record Fetcher loads the hierarchical record graph for a batch of
//! order identifiers: order, then milestones, then line items per milestone.
//! Refund-variant milestones are dropped here. Missing order identifiers are
//! simply absent from the result.

use crate::adapters::store::traits::OrderRepository;
use crate::domain::ids::OrderId;
use crate::domain::milestone::MilestoneGraph;
use crate::domain::order::OrderGraph;
use crate::domain::Result;
use std::sync::Arc;

/// Loads order graphs from the source store
///
/// Read-only: nothing in this component mutates the store.
pub struct RecordFetcher {
    repository: Arc<dyn OrderRepository>,
}

impl RecordFetcher {
    /// Create a new record fetcher over a repository
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Load the order graph for every identifier in the batch
    ///
    /// Identifiers that don't resolve to an order are skipped without error.
    /// Milestones whose record type is in the refund exclusion set never
    /// make it into the returned graph, and neither do their line items.
    pub async fn fetch_batch(&self, order_ids: &[OrderId]) -> Result<Vec<OrderGraph>> {
        let mut graphs = Vec::new();

        for order_id in order_ids {
            let Some(order) = self.repository.find_order(order_id).await? else {
                tracing::warn!(order_id = %order_id, "Order not found, skipping");
                continue;
            };

            let milestones = self.repository.milestones_for_order(order_id).await?;
            let mut kept = Vec::with_capacity(milestones.len());

            for milestone in milestones {
                if milestone.is_refund() {
                    tracing::debug!(
                        order_id = %order_id,
                        milestone_id = %milestone.id,
                        record_type = ?milestone.record_type,
                        "Excluding refund milestone from sync"
                    );
                    continue;
                }

                let line_items = self
                    .repository
                    .line_items_for_milestone(&milestone.id)
                    .await?;

                kept.push(MilestoneGraph {
                    milestone,
                    line_items,
                });
            }

            tracing::debug!(
                order_id = %order_id,
                milestone_count = kept.len(),
                "Loaded order graph"
            );

            graphs.push(OrderGraph {
                order,
                milestones: kept,
            });
        }

        Ok(graphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::traits::{SyncStateCounts, WriteBack};
    use crate::domain::ids::{LineItemId, MilestoneId};
    use crate::domain::milestone::{FeeAmounts, LineItemRecord, MilestoneRecord};
    use crate::domain::order::OrderRecord;
    use async_trait::async_trait;

    struct FakeRepository {
        orders: Vec<OrderRecord>,
        milestones: Vec<MilestoneRecord>,
        line_items: Vec<LineItemRecord>,
    }

    #[async_trait]
    impl OrderRepository for FakeRepository {
        async fn find_order(&self, order_id: &OrderId) -> Result<Option<OrderRecord>> {
            Ok(self.orders.iter().find(|o| &o.id == order_id).cloned())
        }

        async fn milestones_for_order(
            &self,
            order_id: &OrderId,
        ) -> Result<Vec<MilestoneRecord>> {
            Ok(self
                .milestones
                .iter()
                .filter(|m| &m.order_id == order_id)
                .cloned()
                .collect())
        }

        async fn line_items_for_milestone(
            &self,
            milestone_id: &MilestoneId,
        ) -> Result<Vec<LineItemRecord>> {
            Ok(self
                .line_items
                .iter()
                .filter(|li| &li.milestone_id == milestone_id)
                .cloned()
                .collect())
        }

        async fn record_external_id(
            &self,
            _order_id: &OrderId,
            _external_id: &str,
        ) -> Result<WriteBack> {
            Ok(WriteBack::Updated)
        }

        async fn sync_state(&self) -> Result<SyncStateCounts> {
            Ok(SyncStateCounts::default())
        }
    }

    fn order(id: &str) -> OrderRecord {
        OrderRecord {
            id: OrderId::new(id).unwrap(),
            record_type: None,
            status: None,
            order_number: None,
            customer_external_id: None,
            corporate_external_id: None,
            company_email: None,
            subsidiary: None,
            effective_date: None,
            start_date: None,
            end_date: None,
            joining_date: None,
            academic_year: None,
            location: None,
            centre_code: None,
            primary_parent: None,
            primary_mobile: None,
            primary_email: None,
            employee_id: None,
            program: None,
            sub_program: None,
            class_id: None,
            netsuite_order_id: None,
        }
    }

    fn milestone(id: &str, order_id: &str, record_type: &str) -> MilestoneRecord {
        MilestoneRecord {
            id: MilestoneId::new(id).unwrap(),
            order_id: OrderId::new(order_id).unwrap(),
            name: None,
            record_type: Some(record_type.to_string()),
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

    fn line_item(id: &str, milestone_id: &str) -> LineItemRecord {
        LineItemRecord {
            id: LineItemId::new(id).unwrap(),
            milestone_id: MilestoneId::new(milestone_id).unwrap(),
            name: None,
            period_start: None,
            period_end: None,
            active: None,
            fees: FeeAmounts::default(),
            current_month_adjustment: None,
            standard_monthly_amount: None,
        }
    }

    #[tokio::test]
    async fn test_fetch_batch_loads_graph() {
        let repo = Arc::new(FakeRepository {
            orders: vec![order("O1")],
            milestones: vec![milestone("M1", "O1", "Standard")],
            line_items: vec![line_item("L1", "M1"), line_item("L2", "M1")],
        });

        let fetcher = RecordFetcher::new(repo);
        let graphs = fetcher
            .fetch_batch(&[OrderId::new("O1").unwrap()])
            .await
            .unwrap();

        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].milestones.len(), 1);
        assert_eq!(graphs[0].milestones[0].line_items.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_batch_skips_missing_orders() {
        let repo = Arc::new(FakeRepository {
            orders: vec![order("O1")],
            milestones: vec![],
            line_items: vec![],
        });

        let fetcher = RecordFetcher::new(repo);
        let graphs = fetcher
            .fetch_batch(&[
                OrderId::new("O1").unwrap(),
                OrderId::new("O-MISSING").unwrap(),
            ])
            .await
            .unwrap();

        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].order.id.as_str(), "O1");
    }

    #[tokio::test]
    async fn test_fetch_batch_excludes_refund_milestones() {
        let repo = Arc::new(FakeRepository {
            orders: vec![order("O1")],
            milestones: vec![
                milestone("M1", "O1", "Fee_Refunds"),
                milestone("M2", "O1", "Standard"),
                milestone("M3", "O1", "Security_Refunds"),
            ],
            line_items: vec![line_item("L1", "M1"), line_item("L2", "M2")],
        });

        let fetcher = RecordFetcher::new(repo);
        let graphs = fetcher
            .fetch_batch(&[OrderId::new("O1").unwrap()])
            .await
            .unwrap();

        assert_eq!(graphs[0].milestones.len(), 1);
        assert_eq!(graphs[0].milestones[0].milestone.id.as_str(), "M2");
        // Line items of excluded milestones are never fetched into the graph
        assert_eq!(graphs[0].milestones[0].line_items.len(), 1);
        assert_eq!(graphs[0].milestones[0].line_items[0].id.as_str(), "L2");
    }

    #[tokio::test]
    async fn test_fetch_batch_empty_input() {
        let repo = Arc::new(FakeRepository {
            orders: vec![],
            milestones: vec![],
            line_items: vec![],
        });

        let fetcher = RecordFetcher::new(repo);
        let graphs = fetcher.fetch_batch(&[]).await.unwrap();
        assert!(graphs.is_empty());
    }
}
