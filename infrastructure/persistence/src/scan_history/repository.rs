use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::scan::model::ScanRecord;
use business::domain::scan::repository::ScanHistoryRepository;
use business::domain::storage::Collection;

use super::entity::ScanRecordEntity;
use crate::store::KeyValueStore;

pub struct ScanHistoryRepositorySqlite {
    store: KeyValueStore,
}

impl ScanHistoryRepositorySqlite {
    pub fn new(store: KeyValueStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ScanHistoryRepository for ScanHistoryRepositorySqlite {
    async fn get_all(&self) -> Result<Vec<ScanRecord>, RepositoryError> {
        let entities: Vec<ScanRecordEntity> = self.store.read(Collection::ScanHistory).await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save_all(&self, records: &[ScanRecord]) -> Result<(), RepositoryError> {
        let entities: Vec<ScanRecordEntity> =
            records.iter().map(ScanRecordEntity::from_domain).collect();

        self.store.write(Collection::ScanHistory, &entities).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use bigdecimal::BigDecimal;
    use business::domain::scan::model::RecognitionResult;
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_persist_history_with_recognition_details() {
        let repository = ScanHistoryRepositorySqlite::new(KeyValueStore::new(test_pool().await));
        let record = ScanRecord::from_repository(
            Uuid::new_v4(),
            "file:///photos/fromage.jpg".to_string(),
            RecognitionResult {
                text: "Comté 18 mois\n4,95".to_string(),
                confidence: 0.75,
                name: Some("Comté 18 mois".to_string()),
                price: Some(BigDecimal::from_str("4.95").unwrap()),
            },
            Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            Some(Uuid::new_v4()),
        );

        repository.save_all(&[record.clone()]).await.unwrap();

        assert_eq!(repository.get_all().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn should_read_back_fresh_records_unchanged() {
        let repository = ScanHistoryRepositorySqlite::new(KeyValueStore::new(test_pool().await));
        let record = ScanRecord::new(
            "file:///photos/yaourt.jpg".to_string(),
            RecognitionResult {
                text: "Yaourt nature".to_string(),
                confidence: 0.5,
                name: Some("Yaourt nature".to_string()),
                price: None,
            },
            None,
        );

        repository.save_all(&[record.clone()]).await.unwrap();

        assert_eq!(repository.get_all().await.unwrap(), vec![record]);
    }
}
