use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::Settings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::save::SaveSettingsUseCase;

pub struct SaveSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveSettingsUseCase for SaveSettingsUseCaseImpl {
    async fn execute(&self, settings: Settings) -> Result<Settings, SettingsError> {
        self.logger.info(&format!(
            "Saving settings ({} keys)",
            settings.values().len()
        ));
        self.repository.save(&settings).await?;
        Ok(settings)
    }
}
