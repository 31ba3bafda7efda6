//! PostgreSQL source-store adapter
//!
//! Implements [`OrderRepository`] and [`OutcomeLog`] over the pooled client.
//! Sub-record queries carry an explicit sort so fetch order - and therefore
//! payload order - is deterministic: milestones by term start date then id,
//! line items by period start date then id.

use crate::adapters::store::postgresql::client::PgClient;
use crate::adapters::store::postgresql::models::{
    line_item_from_row, milestone_from_row, order_from_row, outcome_from_row, LINE_ITEM_COLUMNS,
    MILESTONE_COLUMNS, ORDER_COLUMNS, OUTCOME_COLUMNS,
};
use crate::adapters::store::traits::{
    OrderRepository, OutcomeLog, SyncStateCounts, WriteBack,
};
use crate::config::StoreConfig;
use crate::domain::ids::{MilestoneId, OrderId};
use crate::domain::milestone::{LineItemRecord, MilestoneRecord};
use crate::domain::order::OrderRecord;
use crate::domain::outcome::OutcomeRecord;
use crate::domain::{Result, StoreError};
use async_trait::async_trait;
use std::sync::Arc;

/// PostgreSQL implementation of the source-store traits
pub struct PgOrderStore {
    client: Arc<PgClient>,
}

impl PgOrderStore {
    /// Create a store over an existing client
    pub fn new(client: PgClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Connect to the store, bootstrap the schema, and verify connectivity
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created, the schema cannot be
    /// applied, or the connection test fails.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let client = PgClient::new(config.clone()).await?;
        client.ensure_schema().await?;
        client.test_connection().await?;

        tracing::info!(
            store = %client.connection_string_safe(),
            "Connected to source store"
        );

        Ok(Self::new(client))
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PgClient> {
        &self.client
    }
}

#[async_trait]
impl OrderRepository for PgOrderStore {
    async fn find_order(&self, order_id: &OrderId) -> Result<Option<OrderRecord>> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");
        let rows = self.client.query(&query, &[&order_id.as_str()]).await?;

        rows.first().map(order_from_row).transpose()
    }

    async fn milestones_for_order(&self, order_id: &OrderId) -> Result<Vec<MilestoneRecord>> {
        let query = format!(
            "SELECT {MILESTONE_COLUMNS} FROM payment_milestones \
             WHERE order_id = $1 \
             ORDER BY term_start ASC NULLS LAST, id ASC"
        );
        let rows = self.client.query(&query, &[&order_id.as_str()]).await?;

        rows.iter().map(milestone_from_row).collect()
    }

    async fn line_items_for_milestone(
        &self,
        milestone_id: &MilestoneId,
    ) -> Result<Vec<LineItemRecord>> {
        let query = format!(
            "SELECT {LINE_ITEM_COLUMNS} FROM milestone_line_items \
             WHERE milestone_id = $1 \
             ORDER BY period_start ASC NULLS LAST, id ASC"
        );
        let rows = self.client.query(&query, &[&milestone_id.as_str()]).await?;

        rows.iter().map(line_item_from_row).collect()
    }

    async fn record_external_id(
        &self,
        order_id: &OrderId,
        external_id: &str,
    ) -> Result<WriteBack> {
        // Write-once guard in the predicate: a populated identifier is
        // never overwritten, even by a concurrent run.
        let updated = self
            .client
            .execute(
                "UPDATE orders \
                 SET netsuite_order_id = $2, synced_at = NOW() \
                 WHERE id = $1 \
                   AND (netsuite_order_id IS NULL OR netsuite_order_id = '')",
                &[&order_id.as_str(), &external_id],
            )
            .await?;

        if updated == 1 {
            return Ok(WriteBack::Updated);
        }

        // No row updated: either the guard held or the order is gone
        let rows = self
            .client
            .query(
                "SELECT netsuite_order_id FROM orders WHERE id = $1",
                &[&order_id.as_str()],
            )
            .await?;

        if rows.is_empty() {
            Err(StoreError::WriteBackFailed {
                order_id: order_id.to_string(),
                message: "order not found".to_string(),
            }
            .into())
        } else {
            Ok(WriteBack::AlreadySet)
        }
    }

    async fn sync_state(&self) -> Result<SyncStateCounts> {
        let rows = self
            .client
            .query(
                "SELECT \
                     COUNT(*) FILTER (WHERE netsuite_order_id IS NOT NULL \
                                        AND netsuite_order_id <> '') AS synced, \
                     COUNT(*) FILTER (WHERE netsuite_order_id IS NULL \
                                         OR netsuite_order_id = '') AS pending \
                 FROM orders",
                &[],
            )
            .await?;

        let row = rows
            .first()
            .ok_or_else(|| StoreError::QueryFailed("sync_state returned no rows".to_string()))?;

        Ok(SyncStateCounts {
            synced: row
                .try_get("synced")
                .map_err(|e| StoreError::InvalidRow(e.to_string()))?,
            pending: row
                .try_get("pending")
                .map_err(|e| StoreError::InvalidRow(e.to_string()))?,
        })
    }
}

#[async_trait]
impl OutcomeLog for PgOrderStore {
    async fn append(&self, record: &OutcomeRecord) -> Result<()> {
        self.client
            .execute(
                "INSERT INTO integration_outcomes ( \
                     id, order_id, channel, operation, \
                     request_body, response_body, success, recorded_at \
                 ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
                &[
                    &record.id,
                    &record.order_id.as_str(),
                    &record.channel,
                    &record.operation,
                    &record.request_body,
                    &record.response_body,
                    &record.success,
                    &record.recorded_at,
                ],
            )
            .await
            .map_err(|e| StoreError::OutcomeAppendFailed(e.to_string()))?;

        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<OutcomeRecord>> {
        let query = format!(
            "SELECT {OUTCOME_COLUMNS} FROM integration_outcomes \
             ORDER BY recorded_at DESC LIMIT $1"
        );
        let rows = self.client.query(&query, &[&limit]).await?;

        rows.iter().map(outcome_from_row).collect()
    }
}
