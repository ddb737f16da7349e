//! Database error types.

use thiserror::Error;

/// Errors produced by store implementations.
#[derive(Error, Debug)]
pub enum DbError {
    /// No persistent store is configured (demo mode)
    #[error("No database is configured")]
    Unavailable,

    /// Any other database error (connection, query, migration, etc.)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        DbError::Other(anyhow::Error::from(err))
    }
}

/// Type alias for store operation results
pub type Result<T> = std::result::Result<T, DbError>;
