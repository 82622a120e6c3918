use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Row scan error: {0}")]
    Scan(String),
}
