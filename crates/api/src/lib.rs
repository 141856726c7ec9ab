//! HTTP API layer with Axum routes and error mapping.
//!
//! This crate provides:
//! - REST API routes for storing and fetching transactions
//! - The JSON body extractor
//! - Mapping from `AppError` to HTTP responses

pub mod error;
pub mod extractors;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use fxledger_core::transaction::TransactionService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Store/fetch orchestration.
    pub transactions: Arc<TransactionService>,
}

impl AppState {
    /// Creates state around a transaction service.
    #[must_use]
    pub fn new(transactions: TransactionService) -> Self {
        Self {
            transactions: Arc::new(transactions),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
