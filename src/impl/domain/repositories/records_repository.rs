use async_trait::async_trait;

use crate::{
    entities::{AnalysisRecord, RecordId},
    errors::TrackerError,
};

/// Ordered collection of saved records.
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    /// All records in insertion order (not sorted by time).
    async fn list(&self) -> Result<Vec<AnalysisRecord>, TrackerError>;

    async fn add(&self, record: AnalysisRecord) -> Result<(), TrackerError>;

    /// Deleting an id that is not present is a no-op.
    async fn delete(&self, id: &RecordId) -> Result<(), TrackerError>;
}
