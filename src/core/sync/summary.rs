//! Batch summary and reporting
//!
//! This module defines structures for tracking and reporting the result of
//! one synchronization batch. Failures never propagate out of the batch;
//! they are collected here and surfaced through the log.

use std::time::Duration;

/// Type of batch error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncErrorType {
    /// Integration settings unavailable or invalid
    Configuration,
    /// Bearer-token issuance failed
    Token,
    /// Source-store read failed
    Store,
    /// The callout for one order failed
    Callout,
    /// The callout succeeded but the local write-back failed
    WriteBack,
    /// Payload serialization failed
    Serialization,
}

/// One error collected during a batch
#[derive(Debug, Clone)]
pub struct SyncError {
    /// Error classification
    pub error_type: SyncErrorType,

    /// Error message
    pub message: String,

    /// Additional context (e.g. the order id)
    pub context: Option<String>,
}

impl SyncError {
    /// Create a new batch error
    pub fn new(error_type: SyncErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Summary of one synchronization batch
#[derive(Debug, Clone)]
pub struct SyncSummary {
    /// Number of order identifiers the batch was invoked with
    pub total_requested: usize,

    /// Number of orders actually found in the source store
    pub total_fetched: usize,

    /// Orders accepted by NetSuite
    pub successful: usize,

    /// Orders rejected by NetSuite or lost to transport failures
    pub failed: usize,

    /// Successful callouts whose local write-back failed
    pub write_back_failures: usize,

    /// Orders skipped because dry-run mode was active
    pub skipped_dry_run: usize,

    /// Batch duration
    pub duration: Duration,

    /// Errors collected during the batch
    pub errors: Vec<SyncError>,
}

impl SyncSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self {
            total_requested: 0,
            total_fetched: 0,
            successful: 0,
            failed: 0,
            write_back_failures: 0,
            skipped_dry_run: 0,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: SyncError) {
        self.errors.push(error);
    }

    /// Whether the batch completed without failures of any kind
    pub fn is_successful(&self) -> bool {
        self.failed == 0 && self.write_back_failures == 0 && self.errors.is_empty()
    }

    /// Success rate over the orders actually attempted, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.successful + self.failed;
        if attempted == 0 {
            return 100.0;
        }
        (self.successful as f64 / attempted as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_requested = self.total_requested,
            total_fetched = self.total_fetched,
            successful = self.successful,
            failed = self.failed,
            write_back_failures = self.write_back_failures,
            skipped_dry_run = self.skipped_dry_run,
            duration_secs = self.duration.as_secs(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Batch completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Batch completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    message = %error.message,
                    context = ?error.context,
                    "Batch error"
                );
            }
        }
    }
}

impl Default for SyncSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_successful() {
        let summary = SyncSummary::new();
        assert!(summary.is_successful());
        assert_eq!(summary.success_rate(), 100.0);
    }

    #[test]
    fn test_failed_order_marks_summary_unsuccessful() {
        let mut summary = SyncSummary::new();
        summary.successful = 3;
        summary.failed = 1;
        assert!(!summary.is_successful());
        assert_eq!(summary.success_rate(), 75.0);
    }

    #[test]
    fn test_write_back_failure_marks_summary_unsuccessful() {
        let mut summary = SyncSummary::new();
        summary.successful = 1;
        summary.write_back_failures = 1;
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_error_marks_summary_unsuccessful() {
        let mut summary = SyncSummary::new();
        summary.add_error(SyncError::new(SyncErrorType::Token, "issuance failed"));
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_error_context_builder() {
        let error = SyncError::new(SyncErrorType::Callout, "status 500")
            .with_context("order_id=ORD-1");
        assert_eq!(error.context.as_deref(), Some("order_id=ORD-1"));
        assert_eq!(error.error_type, SyncErrorType::Callout);
    }

    #[test]
    fn test_with_duration() {
        let summary = SyncSummary::new().with_duration(Duration::from_secs(42));
        assert_eq!(summary.duration.as_secs(), 42);
    }
}
