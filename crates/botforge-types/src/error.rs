use thiserror::Error;

/// Errors surfaced by generation and record-store operations.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("generated bot not found")]
    NotFound,

    #[error("invalid bot configuration: {0}")]
    InvalidConfig(String),

    #[error("template rendering failed: {0}")]
    Render(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in
/// botforge-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

impl From<RepositoryError> for BotError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => BotError::NotFound,
            other => BotError::Storage(other.to_string()),
        }
    }
}
