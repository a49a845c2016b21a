use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://price-scanner.db?mode=rwc";

/// Initialize the database pool and bring the schema up to date
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string (default: "sqlite://price-scanner.db?mode=rwc")
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let mut config = DatabaseConfig::new(db_url);
    if let Some(max_connections) = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|value| value.parse().ok())
    {
        config.max_connections = max_connections;
    }

    let pool = create_sqlite_pool(&config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
