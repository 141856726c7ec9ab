//! Repository implementations.
//!
//! Repositories provide a clean interface for data access, hiding storage
//! and transport details from the rest of the application.

pub mod exchange_rate;
pub mod transaction;

pub use exchange_rate::TreasuryExchangeRateRepository;
pub use transaction::InMemoryTransactionRepository;
