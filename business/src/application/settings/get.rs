use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::model::Settings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::settings::use_cases::get::GetSettingsUseCase;

pub struct GetSettingsUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSettingsUseCase for GetSettingsUseCaseImpl {
    async fn execute(&self) -> Result<Settings, SettingsError> {
        self.logger.debug("Loading settings");
        Ok(self.repository.get().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockSettingsRepo, mock_logger};

    #[tokio::test]
    async fn should_return_stored_settings() {
        let mut mock_repo = MockSettingsRepo::new();
        mock_repo
            .expect_get()
            .returning(|| Ok(Settings::try_from(serde_json::json!({"currency": "EUR"})).unwrap()));

        let use_case = GetSettingsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let settings = use_case.execute().await.unwrap();

        assert_eq!(settings.values()["currency"], "EUR");
    }
}
