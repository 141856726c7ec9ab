//! Transaction service orchestrating validation, persistence and conversion.
//!
//! Validation and business errors are constructed here and passed through
//! unchanged; every other failure reaches the caller as a system error.

use std::sync::Arc;

use chrono::Utc;
use fxledger_shared::types::{TransactionId, months_before};
use fxledger_shared::{AppResult, BusinessError};

use super::repository::TransactionRepository;
use super::types::{ConvertedTransaction, StoreTransactionInput};
use super::validation::{validate_country, validate_store};
use crate::currency::ExchangeService;

/// How far before the transaction date an exchange rate may be dated.
pub const EXCHANGE_RATE_WINDOW_MONTHS: u32 = 6;

/// Stores transactions and fetches them converted to a country's currency.
#[derive(Clone)]
pub struct TransactionService {
    repository: Arc<dyn TransactionRepository>,
    exchange: ExchangeService,
}

impl TransactionService {
    /// Creates a new transaction service.
    #[must_use]
    pub fn new(repository: Arc<dyn TransactionRepository>, exchange: ExchangeService) -> Self {
        Self {
            repository,
            exchange,
        }
    }

    /// Currency service used for fetches.
    #[must_use]
    pub const fn exchange(&self) -> &ExchangeService {
        &self.exchange
    }

    /// Validates and stores a transaction, returning its new id.
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` when the input breaks any rule (nothing stored)
    /// - a system error when the repository fails
    pub async fn store(&self, input: StoreTransactionInput) -> AppResult<TransactionId> {
        let today = Utc::now().date_naive();
        let transaction = validate_store(&input, today)?;
        let stored = self.repository.save(transaction).await?;
        Ok(stored.id)
    }

    /// Fetches a transaction with its amount converted into the currency of
    /// `country`.
    ///
    /// The rate used is the newest one dated no earlier than six calendar
    /// months before the transaction date.
    ///
    /// # Errors
    ///
    /// - `VALIDATION_ERROR` when `country` is shorter than two characters
    /// - `TRANSACTION_NOT_FOUND` when `id` is unknown
    /// - `UNABLE_TO_CONVERT_TO_TARGET_CURRENCY` when no rate qualifies
    /// - a system error for repository or rate source failures
    pub async fn fetch(&self, id: &TransactionId, country: &str) -> AppResult<ConvertedTransaction> {
        validate_country(country)?;

        let transaction = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(BusinessError::TransactionNotFound)?;

        let oldest = months_before(transaction.transaction_date, EXCHANGE_RATE_WINDOW_MONTHS);
        let conversion = self
            .exchange
            .convert(country, oldest, transaction.amount_in_cents)
            .await?;

        Ok(ConvertedTransaction {
            id: transaction.id,
            description: transaction.description,
            transaction_date: transaction.transaction_date,
            usd_amount_in_cents: transaction.amount_in_cents,
            converted_amount_in_cents: conversion.amount,
            exchange_rate: conversion.exchange_rate,
        })
    }
}

impl std::fmt::Debug for TransactionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionService")
            .field("exchange", &self.exchange)
            .finish_non_exhaustive()
    }
}
