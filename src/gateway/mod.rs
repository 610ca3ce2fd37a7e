//! Persistence boundary: the record store trait, its Supabase
//! implementation and the submission gateway on top of it

mod client;
mod error;
mod record;
mod submission;
mod traits;

pub use client::SupabaseClient;
pub use error::StoreError;
pub use record::{InsertedRecord, RecordId};
pub use submission::{SubmissionGateway, SubmissionOutcome, DEFAULT_TABLE};
pub use traits::RecordStore;

#[cfg(test)]
pub use traits::MockRecordStore;
