use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::Settings;

#[async_trait]
pub trait SaveSettingsUseCase: Send + Sync {
    async fn execute(&self, settings: Settings) -> Result<Settings, SettingsError>;
}
