use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;
use crate::domain::scan::repository::ScanHistoryRepository;
use crate::domain::scan::services::{RawRecognition, TextRecognizer};
use crate::domain::settings::model::Settings;
use crate::domain::settings::repository::SettingsRepository;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::storage::{Collection, StorageMaintenance};

mock! {
    pub ShoppingListRepo {}

    #[async_trait]
    impl ShoppingListRepository for ShoppingListRepo {
        async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
        async fn save_all(&self, lists: &[ShoppingList]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ScanHistoryRepo {}

    #[async_trait]
    impl ScanHistoryRepository for ScanHistoryRepo {
        async fn get_all(&self) -> Result<Vec<ScanRecord>, RepositoryError>;
        async fn save_all(&self, records: &[ScanRecord]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub SettingsRepo {}

    #[async_trait]
    impl SettingsRepository for SettingsRepo {
        async fn get(&self) -> Result<Settings, RepositoryError>;
        async fn save(&self, settings: &Settings) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl StorageMaintenance for Storage {
        async fn clear(&self, collections: &[Collection]) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Recognizer {}

    #[async_trait]
    impl TextRecognizer for Recognizer {
        async fn initialize(&self) -> Result<(), ScanError>;
        async fn recognize(&self, image_path: &str) -> Result<RawRecognition, ScanError>;
        async fn available_languages(&self) -> Result<Vec<String>, ScanError>;
        async fn set_languages(&self, languages: Vec<String>) -> Result<(), ScanError>;
        async fn shutdown(&self);
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}
