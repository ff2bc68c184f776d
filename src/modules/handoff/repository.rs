use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::model::PipelineRecord;
use crate::common::error::SetupResult;

pub struct PipelineRecordRepository;

impl PipelineRecordRepository {
    pub async fn save(path: &Path, record: &PipelineRecord) -> SetupResult<()> {
        let json = serde_json::to_vec_pretty(record)?;
        tokio::fs::write(path, json).await?;

        debug!("Saved pipeline record to {}", path.display());
        Ok(())
    }

    /// Returns `None` when nothing has been provisioned yet.
    pub async fn load(path: &Path) -> SetupResult<Option<PipelineRecord>> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
