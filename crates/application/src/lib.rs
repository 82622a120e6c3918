use domain::*;
use infrastructure::*;
use std::sync::Arc;

/// Content Application - wires the store into the domain service
pub struct ContentApp {
    pub content_service: ContentService,
    database: Option<Database>,
}

impl ContentApp {
    /// Connect to the store and fail fast if it is unreachable.
    pub async fn connect(database_url: &str) -> Result<Self, DomainError> {
        // Infrastructure layer - pooled handle, verified with one ping
        let database = Database::connect(database_url).await?;

        let content_repository: Arc<dyn ContentRepository> =
            Arc::new(SqlContentRepository::new(database.get_pool().clone()));

        Ok(Self {
            content_service: ContentService::new(content_repository),
            database: Some(database),
        })
    }

    /// Build the app over any repository, e.g. a substitute store in tests.
    pub fn with_repository(content_repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            content_service: ContentService::new(content_repository),
            database: None,
        }
    }

    /// Release pooled connections, if this app owns a store handle.
    pub async fn shutdown(&self) {
        if let Some(database) = &self.database {
            database.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EmptyRepository;

    #[async_trait]
    impl ContentRepository for EmptyRepository {
        async fn find_all(&self) -> Result<Vec<Content>, DomainError> {
            Ok(Vec::new())
        }

        async fn save(&self, _content: &Content) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete_by_value(&self, _content: &str) -> Result<(), DomainError> {
            Ok(())
        }

        async fn replace_value(&self, _old: &str, _new: &str) -> Result<(), DomainError> {
            Ok(())
        }

        async fn count(&self) -> Result<i64, DomainError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_with_repository_routes_through_service() {
        let app = ContentApp::with_repository(Arc::new(EmptyRepository));
        assert_eq!(app.content_service.count_contents().await.unwrap(), 0);
        assert!(app.content_service.list_contents().await.unwrap().is_empty());
        app.shutdown().await;
    }

    #[tokio::test]
    async fn test_connect_fails_without_reachable_store() {
        let result = ContentApp::connect("nosuchdb://localhost/crud").await;
        assert!(matches!(result, Err(DomainError::Connection(_))));
    }
}
