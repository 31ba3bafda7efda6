//! Sync coordinator - main orchestrator for the synchronization batch
//!
//! One batch is one invocation of [`SyncCoordinator::execute_batch`] over a
//! list of order identifiers. Orders are processed strictly sequentially;
//! the bearer token is fetched once per batch and shared read-only. Each
//! order receives exactly one attempt per run - failures are logged to the
//! outcome store and the loop moves on. No error ever propagates out of the
//! entry point; callers learn about failures only through the returned
//! summary, the audit log, and the write-back side effect.

use crate::adapters::netsuite::{AccessToken, CalloutResult, NetSuiteClient, TokenProvider};
use crate::adapters::store::traits::{OrderRepository, OutcomeLog, WriteBack};
use crate::config::MeridianConfig;
use crate::core::fetch::RecordFetcher;
use crate::core::payload;
use crate::core::sync::summary::{SyncError, SyncErrorType, SyncSummary};
use crate::domain::order::OrderGraph;
use crate::domain::outcome::{OutcomeRecord, OPERATION_SYNC_ORDER, OPERATION_WRITE_BACK};
use crate::domain::{OrderId, Result};
use std::sync::Arc;
use std::time::Instant;

/// Sync coordinator
pub struct SyncCoordinator {
    config: MeridianConfig,
    fetcher: RecordFetcher,
    repository: Arc<dyn OrderRepository>,
    outcome_log: Arc<dyn OutcomeLog>,
    token_provider: Arc<dyn TokenProvider>,
    client: NetSuiteClient,
}

impl SyncCoordinator {
    /// Create a new coordinator
    ///
    /// The configuration is loaded once per batch by the caller and threaded
    /// in here; nothing inside the pipeline reads settings from anywhere
    /// else.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built from the
    /// configuration.
    pub fn new(
        config: MeridianConfig,
        repository: Arc<dyn OrderRepository>,
        outcome_log: Arc<dyn OutcomeLog>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self> {
        let client = NetSuiteClient::new(&config.netsuite)?;

        Ok(Self {
            config,
            fetcher: RecordFetcher::new(repository.clone()),
            repository,
            outcome_log,
            token_provider,
            client,
        })
    }

    /// Execute one synchronization batch
    ///
    /// This is the entry point the scheduler collaborator invokes. It:
    /// 1. Validates the configuration
    /// 2. Loads all order graphs for the batch
    /// 3. Obtains the bearer token once
    /// 4. For each order: assembles the payload, performs the callout,
    ///    classifies the result, writes back the external identifier, and
    ///    records the outcome
    pub async fn execute_batch(&self, order_ids: &[OrderId]) -> SyncSummary {
        let start_time = Instant::now();
        let mut summary = SyncSummary::new();
        summary.total_requested = order_ids.len();

        tracing::info!(order_count = order_ids.len(), "Starting synchronization batch");

        // Configuration errors exit the batch with zero orders processed
        if let Err(e) = self.config.validate() {
            tracing::error!(error = %e, "Configuration invalid, aborting batch");
            summary.add_error(SyncError::new(SyncErrorType::Configuration, e));
            return summary.with_duration(start_time.elapsed());
        }

        // Load all orders for the batch up front
        let graphs = match self.fetcher.fetch_batch(order_ids).await {
            Ok(graphs) => graphs,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load order graphs, aborting batch");
                summary.add_error(SyncError::new(SyncErrorType::Store, e.to_string()));
                return summary.with_duration(start_time.elapsed());
            }
        };
        summary.total_fetched = graphs.len();

        if graphs.is_empty() {
            tracing::info!("No orders to synchronize");
            return summary.with_duration(start_time.elapsed());
        }

        // One token for the whole batch; failure aborts before any callout
        let token = match self.token_provider.issue_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!(error = %e, "Token issuance failed, aborting batch");
                summary.add_error(SyncError::new(SyncErrorType::Token, e.to_string()));
                return summary.with_duration(start_time.elapsed());
            }
        };

        for graph in &graphs {
            self.attempt_order(graph, &token, &mut summary).await;
        }

        summary.with_duration(start_time.elapsed())
    }

    /// Attempt one order: exactly one callout, no retry
    async fn attempt_order(
        &self,
        graph: &OrderGraph,
        token: &AccessToken,
        summary: &mut SyncSummary,
    ) {
        let order_id = &graph.order.id;
        let request = payload::assemble(&graph.order, &graph.milestones);

        // Single serialization boundary: the exact bytes sent are the exact
        // bytes logged.
        let body = match serde_json::to_string(&request) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(order_id = %order_id, error = %e, "Payload serialization failed");
                summary.add_error(
                    SyncError::new(SyncErrorType::Serialization, e.to_string())
                        .with_context(format!("order_id={order_id}")),
                );
                return;
            }
        };

        if self.config.application.dry_run {
            tracing::info!(
                order_id = %order_id,
                payload_bytes = body.len(),
                "DRY RUN: would submit order to NetSuite"
            );
            summary.skipped_dry_run += 1;
            return;
        }

        match self.client.submit_order(order_id, &body, token).await {
            CalloutResult::Success {
                status,
                external_id,
                body: response_body,
            } => {
                summary.successful += 1;
                self.record_outcome(OutcomeRecord::new(
                    order_id.clone(),
                    OPERATION_SYNC_ORDER,
                    body,
                    response_body,
                    true,
                ))
                .await;

                tracing::debug!(order_id = %order_id, status = status, "Callout succeeded");

                if let Some(external_id) = external_id {
                    self.write_back(graph, &external_id, summary).await;
                }
            }
            CalloutResult::Failure {
                status,
                body: response_body,
            } => {
                summary.failed += 1;
                summary.add_error(
                    SyncError::new(
                        SyncErrorType::Callout,
                        match status {
                            Some(status) => format!("NetSuite returned status {status}"),
                            None => format!("Transport failure: {response_body}"),
                        },
                    )
                    .with_context(format!("order_id={order_id}")),
                );
                self.record_outcome(OutcomeRecord::new(
                    order_id.clone(),
                    OPERATION_SYNC_ORDER,
                    body,
                    response_body,
                    false,
                ))
                .await;
            }
        }
    }

    /// Write the assigned identifier back onto the order, write-once
    ///
    /// A failure here is a distinct outcome from the callout's success: the
    /// external call is neither rolled back nor retried.
    async fn write_back(&self, graph: &OrderGraph, external_id: &str, summary: &mut SyncSummary) {
        let order_id = &graph.order.id;

        // Idempotency guard: a previously synchronized order is never
        // overwritten. The repository UPDATE carries the same predicate.
        if graph.order.has_external_id() {
            tracing::debug!(
                order_id = %order_id,
                existing = ?graph.order.netsuite_order_id,
                "Order already carries an external identifier, skipping write-back"
            );
            return;
        }

        match self.repository.record_external_id(order_id, external_id).await {
            Ok(WriteBack::Updated) => {
                tracing::info!(
                    order_id = %order_id,
                    external_id = %external_id,
                    "External identifier written back"
                );
            }
            Ok(WriteBack::AlreadySet) => {
                tracing::debug!(
                    order_id = %order_id,
                    "External identifier already set, write-back skipped"
                );
            }
            Err(e) => {
                tracing::error!(
                    order_id = %order_id,
                    external_id = %external_id,
                    error = %e,
                    "Write-back failed after successful callout"
                );
                summary.write_back_failures += 1;
                summary.add_error(
                    SyncError::new(SyncErrorType::WriteBack, e.to_string())
                        .with_context(format!("order_id={order_id}")),
                );
                self.record_outcome(OutcomeRecord::new(
                    order_id.clone(),
                    OPERATION_WRITE_BACK,
                    external_id.to_string(),
                    e.to_string(),
                    false,
                ))
                .await;
            }
        }
    }

    /// Append an outcome record, never failing the batch over it
    async fn record_outcome(&self, record: OutcomeRecord) {
        if let Err(e) = self.outcome_log.append(&record).await {
            tracing::error!(
                order_id = %record.order_id,
                operation = %record.operation,
                error = %e,
                "Failed to append outcome record"
            );
        }
    }
}
