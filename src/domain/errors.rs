use thiserror::Error;

/// Errors that can occur in the persistence layer
///
/// UPDATE and DELETE distinguish a missing target row from a write the
/// store accepted but did not apply, so handlers can map them to
/// different status codes.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("the store rejected the write")]
    WriteRejected,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
