//! Domain types for transaction recording.

use chrono::NaiveDate;
use fxledger_shared::types::TransactionId;
use rust_decimal::Decimal;

/// Input for storing a transaction, exactly as submitted.
///
/// Every field is optional so that an absent field reports `REQUIRED`
/// instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreTransactionInput {
    /// Free-text description.
    pub description: Option<String>,
    /// Date in `YYYY-MM-DD` form, unparsed.
    pub transaction_date: Option<String>,
    /// Amount in US cents.
    pub amount_in_cents: Option<i64>,
}

/// A validated transaction that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Description, 1 to 50 characters.
    pub description: String,
    /// Date the transaction took place.
    pub transaction_date: NaiveDate,
    /// Non-zero amount in US cents.
    pub amount_in_cents: i64,
}

/// A persisted transaction. Never modified once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Identifier assigned on save.
    pub id: TransactionId,
    /// Description, 1 to 50 characters.
    pub description: String,
    /// Date the transaction took place.
    pub transaction_date: NaiveDate,
    /// Non-zero amount in US cents.
    pub amount_in_cents: i64,
}

impl Transaction {
    /// Attaches an id to a validated transaction.
    #[must_use]
    pub fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Self {
            id,
            description: new.description,
            transaction_date: new.transaction_date,
            amount_in_cents: new.amount_in_cents,
        }
    }
}

/// A stored transaction with its amount converted for a target country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedTransaction {
    /// Transaction id.
    pub id: TransactionId,
    /// Description.
    pub description: String,
    /// Date the transaction took place.
    pub transaction_date: NaiveDate,
    /// Original amount in US cents.
    pub usd_amount_in_cents: i64,
    /// Amount in the target currency's minor units.
    pub converted_amount_in_cents: i64,
    /// Rate used for the conversion.
    pub exchange_rate: Decimal,
}
