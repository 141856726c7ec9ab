//! Mapping from application errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fxledger_shared::{AppError, ErrorKind, FieldError};
use serde::Serialize;
use tracing::{debug, error};

/// Response body for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    /// Error code.
    pub message: &'static str,
    /// Field violations; omitted when there are none.
    #[serde(skip_serializing_if = "<[FieldError]>::is_empty")]
    pub fields: &'a [FieldError],
}

/// Wrapper that turns an [`AppError`] into a response.
///
/// The status and body depend only on [`AppError::kind`]. System error
/// details are logged and never sent to the client.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        match err.kind() {
            ErrorKind::System => error!(error = %err, "Request failed"),
            ErrorKind::MalformedRequest | ErrorKind::Validation | ErrorKind::Business => {
                debug!(error = %err, "Request rejected");
            }
        }

        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            message: err.error_code(),
            fields: err.fields(),
        };
        (status, Json(body)).into_response()
    }
}
