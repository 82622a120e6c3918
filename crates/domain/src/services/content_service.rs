use crate::entities::{Content, ContentUpdate};
use crate::errors::DomainError;
use crate::repositories::ContentRepository;
use std::sync::Arc;

/// Content Service - one repository call per operation
///
/// No validation or composition happens here: every operation issues a
/// single statement and surfaces the store's error untouched.
pub struct ContentService {
    content_repository: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(content_repository: Arc<dyn ContentRepository>) -> Self {
        Self { content_repository }
    }

    /// List every stored value, in whatever order the store returns them
    pub async fn list_contents(&self) -> Result<Vec<Content>, DomainError> {
        self.content_repository.find_all().await
    }

    /// Insert a new row; duplicates are allowed
    pub async fn create_content(&self, content: Content) -> Result<(), DomainError> {
        self.content_repository.save(&content).await
    }

    /// Delete all rows holding this value
    pub async fn delete_content(&self, content: Content) -> Result<(), DomainError> {
        self.content_repository.delete_by_value(&content.content).await
    }

    /// Rewrite all rows holding `old_content`
    pub async fn update_content(&self, update: ContentUpdate) -> Result<(), DomainError> {
        self.content_repository
            .replace_value(&update.old_content, &update.new_content)
            .await
    }

    pub async fn count_contents(&self) -> Result<i64, DomainError> {
        self.content_repository.count().await
    }
}
