use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Connection pool wrapper. The lead pipeline performs exactly one insert
/// per request, so a small pool with a short acquire timeout is plenty.
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        // Fail fast at startup rather than on the first submission.
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }
}
