use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::shopping_list::mutation::ListMutator;
use crate::domain::logger::Logger;
use crate::domain::settings::errors::SettingsError;
use crate::domain::settings::use_cases::clear_all_data::ClearAllDataUseCase;
use crate::domain::storage::{Collection, StorageMaintenance};

/// Wipes every collection while holding the writer locks of the shopping
/// lists and the scan history, so no in-flight write can restore stale data.
pub struct ClearAllDataUseCaseImpl {
    pub storage: Arc<dyn StorageMaintenance>,
    pub mutator: Arc<ListMutator>,
    pub history_lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearAllDataUseCase for ClearAllDataUseCaseImpl {
    async fn execute(&self) -> Result<(), SettingsError> {
        self.logger.warn("Clearing all stored data");
        let _lists_guard = self.mutator.lock().await;
        let _history_guard = self.history_lock.lock().await;
        self.storage.clear(&Collection::ALL).await?;
        self.logger.info("All stored data cleared");
        Ok(())
    }
}
