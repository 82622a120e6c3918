use async_trait::async_trait;
use domain::{Content, ContentRepository, DomainError};
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use tracing::debug;

// Placeholders use `?`, which both MySQL and SQLite accept.
const SELECT_ALL: &str = "SELECT content FROM crud";
const INSERT: &str = "INSERT INTO crud (content) VALUES (?)";
const DELETE_BY_VALUE: &str = "DELETE FROM crud WHERE content = ?";
const UPDATE_BY_VALUE: &str = "UPDATE crud SET content = ? WHERE content = ?";
const COUNT: &str = "SELECT COUNT(*) FROM crud";

/// `ContentRepository` over the `crud` table.
///
/// Every value is bound as a statement parameter, never spliced into SQL.
pub struct SqlContentRepository {
    pool: AnyPool,
}

impl SqlContentRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    DomainError::Query(e.to_string())
}

fn scan_error(e: sqlx::Error) -> DomainError {
    DomainError::Scan(e.to_string())
}

/// Read a text column whichever way the backend reports it.
///
/// MySQL sends `TEXT` columns as blobs, so anything that is not decoded as
/// text is read as bytes and must be valid UTF-8.
fn decode_text(row: &AnyRow, column: &str) -> Result<String, DomainError> {
    if let Ok(value) = row.try_get::<String, _>(column) {
        return Ok(value);
    }

    let bytes: Vec<u8> = row.try_get(column).map_err(scan_error)?;
    String::from_utf8(bytes).map_err(|e| DomainError::Scan(e.to_string()))
}

#[async_trait]
impl ContentRepository for SqlContentRepository {
    async fn find_all(&self) -> Result<Vec<Content>, DomainError> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter()
            .map(|row| decode_text(row, "content").map(Content::new))
            .collect()
    }

    async fn save(&self, content: &Content) -> Result<(), DomainError> {
        sqlx::query(INSERT)
            .bind(content.content.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(())
    }

    async fn delete_by_value(&self, content: &str) -> Result<(), DomainError> {
        let result = sqlx::query(DELETE_BY_VALUE)
            .bind(content)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;
        debug!("Deleted {} row(s)", result.rows_affected());
        Ok(())
    }

    async fn replace_value(&self, old_content: &str, new_content: &str) -> Result<(), DomainError> {
        let result = sqlx::query(UPDATE_BY_VALUE)
            .bind(new_content)
            .bind(old_content)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;
        debug!("Updated {} row(s)", result.rows_affected());
        Ok(())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let row = sqlx::query(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        row.try_get::<i64, _>(0).map_err(scan_error)
    }
}
