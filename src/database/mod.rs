/// Database modules organized by feature
mod entries;
mod migrations;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

/// Database connection pool wrapper
///
/// Handles all store operations for schedule entries
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection and run migrations
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let db = Self { pool };
        db.run_migrations().await?;

        info!("Database connected and migrations completed");
        Ok(db)
    }

    /// Get a reference to the connection pool (for internal use)
    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wrap an existing pool and run migrations (store and handler tests)
    #[cfg(test)]
    pub(crate) async fn from_pool(pool: PgPool) -> Result<Self, sqlx::Error> {
        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }
}
