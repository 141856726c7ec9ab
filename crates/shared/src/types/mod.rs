//! Common types used across the application.

pub mod date;
pub mod id;

pub use date::{DATE_FORMAT, format_date, months_before, parse_date};
pub use id::TransactionId;
