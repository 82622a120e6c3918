use domain::DomainError;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use tracing::{debug, info};

/// Shared, pooled handle to the relational store.
///
/// Built once at startup and cloned into repositories; the pool itself
/// serializes access to individual connections.
pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// Open a pool for `database_url` and verify the store answers.
    ///
    /// Fails if the URL is unusable or the liveness ping does not succeed.
    pub async fn connect(database_url: &str) -> Result<Self, DomainError> {
        Self::connect_with(AnyPoolOptions::new(), database_url).await
    }

    /// Same as [`Database::connect`] with caller-supplied pool options.
    pub async fn connect_with(
        options: AnyPoolOptions,
        database_url: &str,
    ) -> Result<Self, DomainError> {
        install_default_drivers();

        let pool = options
            .connect(database_url)
            .await
            .map_err(|e| DomainError::Connection(e.to_string()))?;

        let database = Database { pool };
        database.ping().await?;
        info!("Connected to the database successfully");

        Ok(database)
    }

    /// Single round trip to check the store is reachable.
    pub async fn ping(&self) -> Result<(), DomainError> {
        debug!("Pinging database");
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Connection(e.to_string()))?;
        Ok(())
    }

    pub fn get_pool(&self) -> &AnyPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_pings_store() {
        let database = Database::connect_with(
            AnyPoolOptions::new().max_connections(1),
            "sqlite::memory:",
        )
        .await
        .unwrap();

        assert!(database.ping().await.is_ok());
        database.close().await;
    }

    #[tokio::test]
    async fn test_connect_rejects_unknown_scheme() {
        let result = Database::connect("nosuchdb://localhost/crud").await;
        assert!(matches!(result, Err(DomainError::Connection(_))));
    }
}
