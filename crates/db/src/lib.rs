//! Data access layer for fxledger.
//!
//! This crate provides:
//! - An in-memory, lock-guarded transaction repository
//! - The US Treasury exchange-rate repository
//!
//! Both implement traits from `fxledger-core`, so the service layer never
//! sees which backing store or rate source is wired in.

pub mod repositories;

pub use repositories::{InMemoryTransactionRepository, TreasuryExchangeRateRepository};
