use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::Mutex;

use crate::{
    data::datasources::records_json_datasource::{
        RecordsJsonDatasource, RecordsJsonDatasourceImpl,
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{AnalysisRecord, RecordId},
    errors::TrackerError,
};

fn insert(records: &mut Vec<AnalysisRecord>, record: AnalysisRecord) -> Result<(), TrackerError> {
    if records.iter().any(|r| r.id == record.id) {
        return Err(TrackerError::DuplicateRecordId { id: record.id });
    }
    records.push(record);
    Ok(())
}

/// Returns whether anything was removed.
fn remove(records: &mut Vec<AnalysisRecord>, id: &RecordId) -> bool {
    let before = records.len();
    records.retain(|r| &r.id != id);
    records.len() != before
}

// In-memory.
// ---

#[derive(Default)]
pub struct InMemoryRecordsRepository {
    records: Mutex<Vec<AnalysisRecord>>,
}

impl InMemoryRecordsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AnalysisRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl RecordsRepository for InMemoryRecordsRepository {
    async fn list(&self) -> Result<Vec<AnalysisRecord>, TrackerError> {
        Ok(self.records.lock().await.clone())
    }

    async fn add(&self, record: AnalysisRecord) -> Result<(), TrackerError> {
        debug!("Adding record '{}' ({}).", record.id, record.name);
        insert(&mut *self.records.lock().await, record)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), TrackerError> {
        if !remove(&mut *self.records.lock().await, id) {
            debug!("Delete of unknown record '{}' ignored.", id);
        }
        Ok(())
    }
}

// JSON file.
// ---

/// Records persisted as a single JSON array. Every mutation reloads the file,
/// applies the change and rewrites it.
pub struct JsonFileRecordsRepository<DS = RecordsJsonDatasourceImpl>
where
    DS: RecordsJsonDatasource,
{
    path: PathBuf,
    datasource: DS,
    // Serializes read-modify-write cycles within the process.
    lock: Mutex<()>,
}

impl JsonFileRecordsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            datasource: RecordsJsonDatasourceImpl::new(),
            lock: Mutex::new(()),
        }
    }
}

impl<DS: RecordsJsonDatasource> JsonFileRecordsRepository<DS> {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<DS: RecordsJsonDatasource> RecordsRepository for JsonFileRecordsRepository<DS> {
    async fn list(&self) -> Result<Vec<AnalysisRecord>, TrackerError> {
        let _guard = self.lock.lock().await;
        self.datasource.load(&self.path).await
    }

    async fn add(&self, record: AnalysisRecord) -> Result<(), TrackerError> {
        let _guard = self.lock.lock().await;
        let mut records = self.datasource.load(&self.path).await?;
        let id = record.id.clone();
        insert(&mut records, record)?;
        self.datasource.save(&self.path, &records).await?;
        info!("Saved record '{}' to '{}'.", id, self.path.display());
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), TrackerError> {
        let _guard = self.lock.lock().await;
        let mut records = self.datasource.load(&self.path).await?;
        if !remove(&mut records, id) {
            debug!("Delete of unknown record '{}' ignored.", id);
            return Ok(());
        }
        self.datasource.save(&self.path, &records).await?;
        info!("Deleted record '{}' from '{}'.", id, self.path.display());
        Ok(())
    }
}
