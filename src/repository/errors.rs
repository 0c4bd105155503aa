//! Repository error types

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by repository operations.
///
/// The repository never catches and hides a storage failure; it is passed
/// through for the request-handling layer to translate.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An employee with this identity already exists.
    #[error("Employee with id_number {0} already exists")]
    DuplicateId(i64),

    /// The durable medium failed; fatal to the operation.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A lock guarding the collection was poisoned by a panicking writer.
    #[error("Repository lock poisoned")]
    LockPoisoned,
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
