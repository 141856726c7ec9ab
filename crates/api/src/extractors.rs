//! Request extractors.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Query, Request,
        rejection::{JsonRejection, QueryRejection},
    },
    http::request::Parts,
};
use fxledger_shared::AppError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejection is a `BAD_REQUEST` [`ApiError`].
///
/// Covers syntax errors, type mismatches and a missing or wrong
/// `Content-Type`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection: JsonRejection| {
                ApiError(AppError::MalformedRequest(rejection.body_text()))
            })
    }
}

/// Query string as ordered `(name, value)` pairs.
///
/// Repeated names are kept in order, so [`QueryPairs::first`] gives
/// first-value-wins lookup. Undecodable input is a `BAD_REQUEST`
/// [`ApiError`].
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    /// Returns the first value given for `name`.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| Self(pairs))
            .map_err(|rejection: QueryRejection| {
                ApiError(AppError::MalformedRequest(rejection.body_text()))
            })
    }
}
