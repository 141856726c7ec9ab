//! Liveness endpoint.
//!
//! The store lives in process memory, so if this handler runs the store is
//! reachable. The exchange-rate source is not probed; the response only
//! reports the bound each fetch applies to it.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `healthy` when served.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Upper bound of one exchange-rate lookup, in milliseconds.
    pub rate_lookup_timeout_ms: u64,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let timeout = state.transactions.exchange().lookup_timeout();
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        rate_lookup_timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
    })
}

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
