//! Error type for store operations.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the row does not exist" from "the database failed." Everything sqlx can
//! raise lands in `Database` with the original error attached.

use thiserror::Error;

/// Errors returned by `TodoStore` methods.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No todo row exists with the given id.
    #[error("todo with id:{0} does not exist")]
    NotFound(i64),

    /// The underlying database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
