//! Trait abstraction for the persistence service to enable mocking in tests

use async_trait::async_trait;

use super::{InsertedRecord, StoreError};
use crate::state::SubmissionRecord;

/// Capability to insert one record into a named table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert `record` into `table` and return the created row
    async fn insert(
        &self,
        table: &str,
        record: &SubmissionRecord,
    ) -> Result<InsertedRecord, StoreError>;
}
