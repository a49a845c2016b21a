use async_trait::async_trait;

use crate::domain::settings::errors::SettingsError;

/// Wipes shopping lists, scan history and settings.
#[async_trait]
pub trait ClearAllDataUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), SettingsError>;
}
