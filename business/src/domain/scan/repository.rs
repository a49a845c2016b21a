use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ScanRecord;

#[async_trait]
pub trait ScanHistoryRepository: Send + Sync {
    /// Stored history, newest first.
    async fn get_all(&self) -> Result<Vec<ScanRecord>, RepositoryError>;
    async fn save_all(&self, records: &[ScanRecord]) -> Result<(), RepositoryError>;
}
