use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Settings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Stored settings, or empty settings if none were ever saved.
    async fn get(&self) -> Result<Settings, RepositoryError>;
    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError>;
}
