//! Transaction recording and retrieval.
//!
//! This module implements the store/fetch workflow:
//! - Input types and the persisted entity
//! - Store and fetch validation rules
//! - Identifier generation strategies
//! - The repository contract for persisted transactions
//! - The orchestration service tying validation, persistence and conversion

pub mod error;
pub mod id;
pub mod repository;
pub mod service;
pub mod types;
pub mod validation;

pub use error::{IdGenerationError, RepositoryError};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use repository::TransactionRepository;
pub use service::{EXCHANGE_RATE_WINDOW_MONTHS, TransactionService};
pub use types::{ConvertedTransaction, NewTransaction, StoreTransactionInput, Transaction};
pub use validation::{validate_country, validate_store};
