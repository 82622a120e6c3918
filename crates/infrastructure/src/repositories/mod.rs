pub mod sql_content_repository;

pub use sql_content_repository::SqlContentRepository;
