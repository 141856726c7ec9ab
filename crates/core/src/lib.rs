//! Core business logic for fxledger.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Exchange-rate records, lookup contract, and minor-unit conversion
//! - `transaction` - Transaction validation, identifier generation, and the
//!   store/fetch orchestration

pub mod currency;
pub mod transaction;
