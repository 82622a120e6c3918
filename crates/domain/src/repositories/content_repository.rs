use crate::entities::Content;
use crate::errors::DomainError;
use async_trait::async_trait;

/// Persistence port for content rows.
///
/// Each method maps to exactly one statement against the store. Update and
/// delete apply to every row whose value matches; the affected-row count is
/// not reported.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Content>, DomainError>;
    async fn save(&self, content: &Content) -> Result<(), DomainError>;
    async fn delete_by_value(&self, content: &str) -> Result<(), DomainError>;
    async fn replace_value(&self, old_content: &str, new_content: &str) -> Result<(), DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
}
