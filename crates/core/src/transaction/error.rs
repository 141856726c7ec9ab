//! Transaction persistence error types.

use fxledger_shared::AppError;
use thiserror::Error;

/// An identifier generator could not produce an id.
#[derive(Debug, Error)]
#[error("Failed to generate transaction id: {0}")]
pub struct IdGenerationError(pub String);

/// Errors raised by a transaction repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No id could be minted; nothing was stored.
    #[error(transparent)]
    IdGeneration(#[from] IdGenerationError),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self::system(err)
    }
}
