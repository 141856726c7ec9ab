//! Repository contract for persisted transactions.

use async_trait::async_trait;
use fxledger_shared::types::TransactionId;

use super::error::RepositoryError;
use super::types::{NewTransaction, Transaction};

/// Storage for transactions, keyed by id.
///
/// Implementations must be safe to call concurrently from many tasks.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Assigns a fresh id to `transaction`, stores it, and returns the stored
    /// copy. If no id can be generated nothing is stored.
    async fn save(&self, transaction: NewTransaction) -> Result<Transaction, RepositoryError>;

    /// Looks up a transaction, returning `None` when no such id exists.
    async fn find_by_id(&self, id: &TransactionId) -> Result<Option<Transaction>, RepositoryError>;
}
