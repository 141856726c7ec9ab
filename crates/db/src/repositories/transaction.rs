//! In-memory transaction repository.
//!
//! Transactions live in a `HashMap` behind a reader/writer lock: any number
//! of concurrent lookups, one insert at a time. Contents are lost when the
//! process exits.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use fxledger_core::transaction::{
    IdGenerator, NewTransaction, RepositoryError, Transaction, TransactionRepository,
};
use fxledger_shared::types::TransactionId;
use tokio::sync::RwLock;
use tracing::debug;

/// Volatile transaction store keyed by generated id.
pub struct InMemoryTransactionRepository {
    data: RwLock<HashMap<TransactionId, Transaction>>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryTransactionRepository {
    /// Creates an empty repository that mints ids with `id_generator`.
    #[must_use]
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
            id_generator,
        }
    }

    /// Returns the number of stored transactions.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    /// Returns true if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn save(&self, transaction: NewTransaction) -> Result<Transaction, RepositoryError> {
        // Mint the id before taking the lock; a failure leaves the map untouched.
        let id = self.id_generator.next_id()?;
        let stored = Transaction::from_new(id, transaction);

        let mut data = self.data.write().await;
        if data.contains_key(&stored.id) {
            return Err(RepositoryError::Storage(format!(
                "transaction id {} already in use",
                stored.id
            )));
        }
        data.insert(stored.id.clone(), stored.clone());
        drop(data);

        debug!(transaction_id = %stored.id, "Transaction stored");
        Ok(stored)
    }

    async fn find_by_id(&self, id: &TransactionId) -> Result<Option<Transaction>, RepositoryError> {
        Ok(self.data.read().await.get(id).cloned())
    }
}

impl std::fmt::Debug for InMemoryTransactionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTransactionRepository")
            .finish_non_exhaustive()
    }
}
