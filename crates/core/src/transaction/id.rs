//! Transaction identifier generation strategies.

use std::sync::atomic::{AtomicU64, Ordering};

use fxledger_shared::types::TransactionId;
use uuid::Uuid;

use super::error::IdGenerationError;

/// Mints identifiers for newly stored transactions.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh, never-before-issued id.
    fn next_id(&self) -> Result<TransactionId, IdGenerationError>;
}

/// Production generator issuing UUID v7 (time-ordered) strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> Result<TransactionId, IdGenerationError> {
        Ok(TransactionId::new(Uuid::now_v7().to_string()))
    }
}

/// Predictable generator issuing `sequentialID-1`, `sequentialID-2`, ...
///
/// Safe to share between tasks; each call receives a distinct number.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    previous: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `sequentialID-1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Result<TransactionId, IdGenerationError> {
        let next = self.previous.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(TransactionId::new(format!("sequentialID-{next}")))
    }
}
