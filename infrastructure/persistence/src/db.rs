use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error: {0}")]
    ConnectionError(String),
    #[error("database.migrations_not_found: {0}")]
    MigrationsNotFound(String),
    #[error("database.migration_error: {0}")]
    MigrationError(String),
}

/// Connection pool settings for the product store
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    tracing::info!(
        "Product store pool ready (max {} connections)",
        config.max_connections
    );
    Ok(pool)
}

/// Applies pending migrations from `migrations_path`, in file-name order.
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.is_dir() {
        return Err(DatabaseError::MigrationsNotFound(migrations_path.to_string()));
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_small_pool_with_thirty_second_timeout() {
        let config = DatabaseConfig::new("postgres://localhost/expiry".to_string());

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn should_fail_when_migrations_directory_is_missing() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/expiry")
            .unwrap();

        let result = run_migrations(&pool, "./does-not-exist").await;

        assert!(matches!(result, Err(DatabaseError::MigrationsNotFound(_))));
    }
}
