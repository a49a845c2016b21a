use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy", or "degraded" when the database does not answer
    pub status: String,
    /// Whether the local database answered a trivial query
    pub storage_available: bool,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

pub struct Api {
    pool: SqlitePool,
}

impl Api {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Always answers 200 so liveness probes succeed; inspect `status` for
    /// storage problems.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let storage_available = sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|err| tracing::warn!("Health check query failed: {}", err))
            .is_ok();

        Json(HealthCheckResponse {
            status: if storage_available { "healthy" } else { "degraded" }.to_string(),
            storage_available,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
