//! Generated-bot repository trait definition.

use botforge_types::bot::{GeneratedBot, GeneratedBotId};
use botforge_types::error::RepositoryError;

/// Repository trait for generated-bot persistence.
///
/// Implementations live in botforge-infra (e.g., SqliteGeneratedBotRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
///
/// Records are immutable once inserted: the port offers no update operation.
pub trait GeneratedBotRepository: Send + Sync {
    /// Store a new record. The caller guarantees a freshly generated id.
    fn insert(
        &self,
        bot: &GeneratedBot,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List all records, newest first (creation time descending).
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<GeneratedBot>, RepositoryError>> + Send;

    /// Get a record by its unique id.
    fn get_by_id(
        &self,
        id: &GeneratedBotId,
    ) -> impl std::future::Future<Output = Result<Option<GeneratedBot>, RepositoryError>> + Send;

    /// Delete a record by id. Returns the number of rows removed (0 or 1),
    /// letting the caller distinguish "not found" from "deleted".
    fn delete(
        &self,
        id: &GeneratedBotId,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
