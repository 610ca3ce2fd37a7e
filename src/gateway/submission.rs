//! Submission gateway: one insert per submit

use super::{RecordId, RecordStore, StoreError};
use crate::state::SubmissionRecord;

/// Table the form writes to unless configured otherwise
pub const DEFAULT_TABLE: &str = "user_inputs";

/// Result of a single submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The row was created
    Success(RecordId),
    /// The service answered with an error
    RejectedByService(String),
    /// The call itself did not complete
    TransportFailure(String),
}

/// Performs exactly one insert per [`submit`](Self::submit) call against an
/// injected [`RecordStore`]. No retries, no deduplication.
pub struct SubmissionGateway {
    store: Box<dyn RecordStore>,
    table: String,
}

impl SubmissionGateway {
    pub fn new(store: Box<dyn RecordStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Insert `record` and classify the result
    pub async fn submit(&self, record: &SubmissionRecord) -> SubmissionOutcome {
        tracing::info!(
            table = %self.table,
            personas = record.personas.len(),
            subreddits = record.subreddits.len(),
            queries = record.chatgpt_queries.len(),
            "Submitting content entry"
        );

        match self.store.insert(&self.table, record).await {
            Ok(inserted) => {
                tracing::info!(
                    created_at = ?inserted.created_at,
                    "Content entry stored with id {}",
                    inserted.id
                );
                SubmissionOutcome::Success(inserted.id)
            }
            Err(StoreError::Rejected { status, message }) => {
                tracing::warn!("Insert rejected ({}): {}", status, message);
                SubmissionOutcome::RejectedByService(message)
            }
            Err(StoreError::Transport(detail)) => {
                tracing::error!("Insert failed: {}", detail);
                SubmissionOutcome::TransportFailure(detail)
            }
        }
    }
}
