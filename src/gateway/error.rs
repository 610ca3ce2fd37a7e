//! Error types for the persistence boundary

use thiserror::Error;

/// Errors reported by a [`RecordStore`](super::RecordStore) insert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The service answered but refused the insert
    #[error("service rejected insert with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// The request never produced a usable answer
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}
