use async_trait::async_trait;

use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;

#[async_trait]
pub trait GetScanHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ScanRecord>, ScanError>;
}
