//! PostgreSQL adapters.

mod case_repository;
mod message_repository;
mod schema;
mod user_directory;

pub use case_repository::PostgresCaseRepository;
pub use message_repository::PostgresMessageRepository;
pub use schema::ensure_schema;
pub use user_directory::PostgresUserDirectory;
