//! NetSuite integration client
//!
//! Performs the one outbound POST per order and classifies the response.
//! Exactly the HTTP statuses 200 and 201 count as success; any other status
//! and any transport-level failure classify as failure with the raw body or
//! error text preserved for the audit log. The client never retries.

use crate::adapters::netsuite::models::SyncResponse;
use crate::adapters::netsuite::token::AccessToken;
use crate::config::NetSuiteConfig;
use crate::domain::ids::OrderId;
use crate::domain::{MeridianError, Result};
use std::time::Duration;

/// Classified result of one synchronization callout
#[derive(Debug, Clone)]
pub enum CalloutResult {
    /// The endpoint accepted the order (status 200 or 201)
    Success {
        /// HTTP status code
        status: u16,
        /// External identifier extracted from the response body, if any
        external_id: Option<String>,
        /// Raw response body
        body: String,
    },
    /// The endpoint rejected the order, or the transport failed
    Failure {
        /// HTTP status code; `None` for transport-level failures
        status: Option<u16>,
        /// Raw response body, or the transport error text
        body: String,
    },
}

impl CalloutResult {
    /// Whether this result is a success
    pub fn is_success(&self) -> bool {
        matches!(self, CalloutResult::Success { .. })
    }
}

/// HTTP client for the NetSuite order-synchronization endpoint
pub struct NetSuiteClient {
    client: reqwest::Client,
    endpoint: String,
}

impl NetSuiteClient {
    /// Create a client from the NetSuite configuration
    ///
    /// The request timeout is the configured bound on a stuck attempt; there
    /// is no other cancellation mechanism once a batch has started.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &NetSuiteConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(|e| {
            MeridianError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one order payload and classify the outcome
    ///
    /// The body is the already-serialized request JSON so the exact bytes
    /// sent can also be handed to the audit log. Transport failures fold
    /// into [`CalloutResult::Failure`] rather than an error, because one
    /// order's failure must not disturb the rest of the batch.
    pub async fn submit_order(
        &self,
        order_id: &OrderId,
        body: &str,
        token: &AccessToken,
    ) -> CalloutResult {
        tracing::debug!(
            order_id = %order_id,
            endpoint = %self.endpoint,
            "Submitting order to NetSuite"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", token.as_str()))
            .body(body.to_string())
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(order_id = %order_id, error = %e, "NetSuite callout failed");
                return CalloutResult::Failure {
                    status: None,
                    body: e.to_string(),
                };
            }
        };

        let status = response.status().as_u16();
        let response_body = response.text().await.unwrap_or_default();

        classify(order_id, status, response_body)
    }
}

/// Classify an HTTP response per the integration contract
fn classify(order_id: &OrderId, status: u16, body: String) -> CalloutResult {
    if status == 200 || status == 201 {
        let external_id = extract_external_id(&body);

        tracing::info!(
            order_id = %order_id,
            status = status,
            external_id = ?external_id,
            "Order accepted by NetSuite"
        );

        CalloutResult::Success {
            status,
            external_id,
            body,
        }
    } else {
        tracing::warn!(
            order_id = %order_id,
            status = status,
            "Order rejected by NetSuite"
        );

        CalloutResult::Failure {
            status: Some(status),
            body,
        }
    }
}

/// Extract the external identifier from a success body, if present
///
/// A body that is not valid JSON yields no identifier; success
/// classification is unaffected.
fn extract_external_id(body: &str) -> Option<String> {
    serde_json::from_str::<SyncResponse>(body)
        .ok()
        .and_then(|response| response.external_id().map(str::to_string))
}
