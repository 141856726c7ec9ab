//! Application-wide error types.
//!
//! Every failure that reaches the HTTP boundary is an [`AppError`]. The
//! boundary dispatches on [`AppError::kind`] only; it never inspects the
//! concrete source of a system error.

use serde::Serialize;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Reason attached to a field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// The field was absent.
    Required,
    /// The value is shorter than allowed.
    MinLength,
    /// The value is longer than allowed.
    MaxLength,
    /// The value is not a `YYYY-MM-DD` date.
    DateBadFormat,
    /// The date is later than today.
    DateInFuture,
    /// The value must not be zero.
    ZeroValue,
}

impl Reason {
    /// Returns the wire representation of this reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::MinLength => "MIN_LENGTH",
            Self::MaxLength => "MAX_LENGTH",
            Self::DateBadFormat => "DATE_BAD_FORMAT",
            Self::DateInFuture => "DATE_IN_FUTURE",
            Self::ZeroValue => "ZERO_VALUE",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field_name: &'static str,
    /// Why the field was rejected.
    pub reason: Reason,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub const fn new(field_name: &'static str, reason: Reason) -> Self {
        Self { field_name, reason }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_name, self.reason)
    }
}

/// Domain-level failures that carry a single message and no field detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusinessError {
    /// No transaction exists with the requested id.
    #[error("TRANSACTION_NOT_FOUND")]
    TransactionNotFound,

    /// No exchange rate within the permitted window exists for the country.
    #[error("UNABLE_TO_CONVERT_TO_TARGET_CURRENCY")]
    UnableToConvertToTargetCurrency,
}

impl BusinessError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            Self::UnableToConvertToTargetCurrency => "UNABLE_TO_CONVERT_TO_TARGET_CURRENCY",
        }
    }
}

/// Classification tag used by the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request body could not be parsed.
    MalformedRequest,
    /// One or more fields violated a validation rule.
    Validation,
    /// A domain rule prevented the operation.
    Business,
    /// Anything else. Details stay server-side.
    System,
}

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request body could not be parsed.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Field-level validation failures, in a stable order.
    #[error("Validation error: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    Business(#[from] BusinessError),

    /// Unclassified internal failure.
    #[error("System error: {0}")]
    System(String),
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// Wraps any displayable failure as a system error.
    pub fn system(err: impl std::fmt::Display) -> Self {
        Self::System(err.to_string())
    }

    /// Returns the classification tag for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedRequest(_) => ErrorKind::MalformedRequest,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Business(_) => ErrorKind::Business,
            Self::System(_) => ErrorKind::System,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::MalformedRequest => 400,
            ErrorKind::Validation | ErrorKind::Business => 422,
            ErrorKind::System => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Business(business) => business.code(),
            Self::System(_) => "SYSTEM_ERROR",
        }
    }

    /// Returns the field violations, empty for every non-validation error.
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::Validation(fields) => fields,
            _ => &[],
        }
    }
}
