//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `ContentSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("content request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("content is not valid UTF-8")]
    InvalidUtf8,
    #[error("content is empty")]
    Empty,
    #[error("invalid content url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors emitted by `ProgressTracker`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ViewerConfig` parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("content base must not be empty")]
    EmptyContentBase,
    #[error("invalid content url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid database url: {0}")]
    InvalidDbUrl(String),
}

/// Errors emitted while bootstrapping a `ViewerSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViewerSessionError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
