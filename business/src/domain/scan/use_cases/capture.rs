use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;

pub struct CaptureScanParams {
    pub image_path: String,
    pub list_id: Option<Uuid>,
}

#[async_trait]
pub trait CaptureScanUseCase: Send + Sync {
    async fn execute(&self, params: CaptureScanParams) -> Result<ScanRecord, ScanError>;
}
