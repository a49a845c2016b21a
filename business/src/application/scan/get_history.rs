use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;
use crate::domain::scan::repository::ScanHistoryRepository;
use crate::domain::scan::use_cases::get_history::GetScanHistoryUseCase;

pub struct GetScanHistoryUseCaseImpl {
    pub repository: Arc<dyn ScanHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetScanHistoryUseCase for GetScanHistoryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ScanRecord>, ScanError> {
        self.logger.debug("Loading scan history");
        Ok(self.repository.get_all().await?)
    }
}
