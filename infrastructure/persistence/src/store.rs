use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::storage::{Collection, StorageMaintenance};

/// Stores each collection as one JSON document keyed by its name.
#[derive(Clone)]
pub struct KeyValueStore {
    pool: SqlitePool,
}

impl KeyValueStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Loads a collection, falling back to `T::default()` when it was never written.
    pub async fn read<T>(&self, collection: Collection) -> Result<T, RepositoryError>
    where
        T: DeserializeOwned + Default,
    {
        let stored: Option<String> =
            sqlx::query_scalar("SELECT value FROM collections WHERE key = ?")
                .bind(collection.key())
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        match stored {
            Some(document) => serde_json::from_str(&document).map_err(|err| {
                tracing::error!("Stored {} document is unreadable: {}", collection, err);
                RepositoryError::Serialization
            }),
            None => Ok(T::default()),
        }
    }

    /// Replaces a collection. The previous document survives any failure.
    pub async fn write<T>(&self, collection: Collection, value: &T) -> Result<(), RepositoryError>
    where
        T: Serialize + ?Sized,
    {
        let document = serde_json::to_string(value).map_err(|err| {
            tracing::error!("Could not serialize {}: {}", collection, err);
            RepositoryError::Serialization
        })?;

        sqlx::query(
            r#"INSERT INTO collections (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at"#,
        )
        .bind(collection.key())
        .bind(document)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }
}

#[async_trait]
impl StorageMaintenance for KeyValueStore {
    async fn clear(&self, collections: &[Collection]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;
        for collection in collections {
            sqlx::query("DELETE FROM collections WHERE key = ?")
                .bind(collection.key())
                .execute(&mut *tx)
                .await
                .map_err(database_error)?;
        }
        tx.commit().await.map_err(database_error)?;

        Ok(())
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("Database error: {}", err);
    RepositoryError::DatabaseError
}
