use std::{io, path::Path};

use async_trait::async_trait;
use log::debug;
use tokio::fs;

use crate::{entities::AnalysisRecord, errors::TrackerError};

#[async_trait]
pub trait RecordsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<AnalysisRecord>, serde_json::Error>;

    async fn load(&self, path: &Path) -> Result<Vec<AnalysisRecord>, TrackerError>;

    async fn save(&self, path: &Path, records: &[AnalysisRecord]) -> Result<(), TrackerError>;
}

pub struct RecordsJsonDatasourceImpl;

impl RecordsJsonDatasourceImpl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordsJsonDatasource for RecordsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<AnalysisRecord>, serde_json::Error> {
        if s.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(s)
    }

    /// A missing file is an empty store.
    async fn load(&self, path: &Path) -> Result<Vec<AnalysisRecord>, TrackerError> {
        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Record store '{}' not found; starting empty.", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(TrackerError::read(path, e)),
        };
        self.from_string(&contents)
            .map_err(|e| TrackerError::invalid_json(path, e))
    }

    /// Writes to a sibling temporary file first, then renames over the target,
    /// so a failed write leaves the previous contents intact.
    async fn save(&self, path: &Path, records: &[AnalysisRecord]) -> Result<(), TrackerError> {
        let json =
            serde_json::to_string_pretty(records).map_err(|e| TrackerError::invalid_json(path, e))?;
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = Path::new(&tmp_name);
        fs::write(tmp_path, json)
            .await
            .map_err(|e| TrackerError::write(tmp_path, e))?;
        fs::rename(tmp_path, path)
            .await
            .map_err(|e| TrackerError::write(path, e))?;
        debug!(
            "Saved {} record(s) to '{}'.",
            records.len(),
            path.display()
        );
        Ok(())
    }
}
