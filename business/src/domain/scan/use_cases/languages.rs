use async_trait::async_trait;

use crate::domain::scan::errors::ScanError;

#[async_trait]
pub trait ListLanguagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, ScanError>;
}

pub struct SetLanguagesParams {
    pub languages: Vec<String>,
}

#[async_trait]
pub trait SetLanguagesUseCase: Send + Sync {
    async fn execute(&self, params: SetLanguagesParams) -> Result<(), ScanError>;
}
