//! Business rule validation for transaction input.
//!
//! Mandatory-field checks run first, correctness checks second, and every
//! violation is collected. Nothing short-circuits, so a caller sees all
//! problems with a request at once, in a stable order.

use chrono::NaiveDate;
use fxledger_shared::types::parse_date;
use fxledger_shared::{AppError, FieldError, Reason};

use super::types::{NewTransaction, StoreTransactionInput};

/// Wire name of the description field.
pub const DESCRIPTION_FIELD: &str = "description";
/// Wire name of the transaction date field.
pub const TRANSACTION_DATE_FIELD: &str = "transactionDate";
/// Wire name of the amount field.
pub const AMOUNT_FIELD: &str = "amountInCents";
/// Wire name of the country query parameter.
pub const COUNTRY_FIELD: &str = "country";

const DESCRIPTION_MIN_LENGTH: usize = 1;
const DESCRIPTION_MAX_LENGTH: usize = 50;
const COUNTRY_MIN_LENGTH: usize = 2;

/// Validates a store request against `today` and returns the parsed
/// transaction.
///
/// # Errors
///
/// Returns `AppError::Validation` carrying every violation found.
pub fn validate_store(
    input: &StoreTransactionInput,
    today: NaiveDate,
) -> Result<NewTransaction, AppError> {
    let mut fields = Vec::new();

    // Mandatory
    if input.description.is_none() {
        fields.push(FieldError::new(DESCRIPTION_FIELD, Reason::Required));
    }
    if input.transaction_date.is_none() {
        fields.push(FieldError::new(TRANSACTION_DATE_FIELD, Reason::Required));
    }
    if input.amount_in_cents.is_none() {
        fields.push(FieldError::new(AMOUNT_FIELD, Reason::Required));
    }

    // Correctness
    if let Some(description) = &input.description {
        let length = description.chars().count();
        if length < DESCRIPTION_MIN_LENGTH {
            fields.push(FieldError::new(DESCRIPTION_FIELD, Reason::MinLength));
        }
        if length > DESCRIPTION_MAX_LENGTH {
            fields.push(FieldError::new(DESCRIPTION_FIELD, Reason::MaxLength));
        }
    }

    let transaction_date = match input.transaction_date.as_deref().map(parse_date) {
        Some(None) => {
            fields.push(FieldError::new(TRANSACTION_DATE_FIELD, Reason::DateBadFormat));
            None
        }
        Some(Some(date)) if date > today => {
            fields.push(FieldError::new(TRANSACTION_DATE_FIELD, Reason::DateInFuture));
            None
        }
        Some(Some(date)) => Some(date),
        None => None,
    };

    if input.amount_in_cents == Some(0) {
        fields.push(FieldError::new(AMOUNT_FIELD, Reason::ZeroValue));
    }

    match (&input.description, transaction_date, input.amount_in_cents) {
        (Some(description), Some(transaction_date), Some(amount_in_cents)) if fields.is_empty() => {
            Ok(NewTransaction {
                description: description.clone(),
                transaction_date,
                amount_in_cents,
            })
        }
        _ => Err(AppError::Validation(fields)),
    }
}

/// Validates the target country of a fetch.
///
/// An empty country is too short rather than missing.
///
/// # Errors
///
/// Returns `AppError::Validation` with a `MIN_LENGTH` violation.
pub fn validate_country(country: &str) -> Result<(), AppError> {
    if country.chars().count() < COUNTRY_MIN_LENGTH {
        return Err(AppError::Validation(vec![FieldError::new(
            COUNTRY_FIELD,
            Reason::MinLength,
        )]));
    }
    Ok(())
}
