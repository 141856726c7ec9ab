//! Shared types, errors, and configuration for fxledger.
//!
//! This crate provides common types used across all other crates:
//! - Typed transaction identifiers
//! - Calendar date parsing and month arithmetic
//! - The application-wide error taxonomy (validation, business, system)
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ExchangeRateConfig, IdConfig, IdStrategy, ServerConfig};
pub use error::{AppError, AppResult, BusinessError, ErrorKind, FieldError, Reason};
