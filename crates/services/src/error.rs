//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question generation is not configured")]
    Disabled,
    #[error("question source returned an empty response")]
    EmptyResponse,
    #[error("question source request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question source returned malformed questions: {0}")]
    Malformed(String),
    #[error("question source returned {got} questions, expected {expected}")]
    WrongCount { expected: u32, got: usize },
}

/// Errors emitted by `ResultStoreService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
