use crate::config::Config;
use crate::domain::calculation::repository::CalculationRepository;
use crate::infrastructure::repositories::sqlx_calculation_repository::SqlxCalculationRepository;
use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Apply the embedded migrations (creates `calculations` and its `created_at` index).
pub async fn run_migrations(pool: &PgPool, ignore_missing: bool) -> anyhow::Result<()> {
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(ignore_missing);
    migrator.run(pool).await?;
    Ok(())
}

/// Open the pool and apply migrations.
///
/// Failure is fatal only in production; elsewhere the service runs without
/// persistence and reports the store as disconnected.
pub async fn connect_store(
    config: &Config,
) -> anyhow::Result<Option<Arc<dyn CalculationRepository>>> {
    let opened = async {
        let pool = create_pool(
            &config.database_url,
            config.database_max_connections,
            Duration::from_secs(config.database_connect_timeout_seconds),
        )
        .await
        .context("database connection failed")?;
        run_migrations(&pool, config.ignore_missing_migrations)
            .await
            .context("database migration failed")?;
        anyhow::Ok(pool)
    }
    .await;

    match opened {
        Ok(pool) => {
            tracing::info!("Connected to PostgreSQL, calculations table ready");
            let store: Arc<dyn CalculationRepository> =
                Arc::new(SqlxCalculationRepository::new(pool));
            Ok(Some(store))
        }
        Err(e) if config.environment.is_production() => Err(e),
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "continuing without database");
            Ok(None)
        }
    }
}
