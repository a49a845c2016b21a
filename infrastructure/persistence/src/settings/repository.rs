use async_trait::async_trait;
use serde_json::{Map, Value};

use business::domain::errors::RepositoryError;
use business::domain::settings::model::Settings;
use business::domain::settings::repository::SettingsRepository;
use business::domain::storage::Collection;

use crate::store::KeyValueStore;

pub struct SettingsRepositorySqlite {
    store: KeyValueStore,
}

impl SettingsRepositorySqlite {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositorySqlite {
    async fn get(&self) -> Result<Settings, RepositoryError> {
        let values: Map<String, Value> = self.store.read(Collection::Settings).await?;
        Ok(Settings::new(values))
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        self.store.write(Collection::Settings, settings.values()).await
    }
}
