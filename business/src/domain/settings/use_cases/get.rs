use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::Settings;

#[async_trait]
pub trait GetSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Settings, SettingsError>;
}
