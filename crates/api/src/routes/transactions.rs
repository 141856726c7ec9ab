//! Transaction routes: store a purchase in US cents and fetch it converted
//! into a country's currency.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use fxledger_core::transaction::{ConvertedTransaction, StoreTransactionInput};
use fxledger_shared::types::{TransactionId, format_date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extractors::{JsonBody, QueryPairs},
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transaction", post(store_transaction))
        .route("/transaction/{id}", get(fetch_transaction))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for storing a transaction.
///
/// Every field may be absent on the wire; absence is a validation failure,
/// not a parse failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreTransactionRequest {
    /// Description, 1 to 50 characters.
    pub description: Option<String>,
    /// Date in `YYYY-MM-DD` form.
    pub transaction_date: Option<String>,
    /// Non-zero amount in US cents.
    pub amount_in_cents: Option<i64>,
}

impl From<StoreTransactionRequest> for StoreTransactionInput {
    fn from(req: StoreTransactionRequest) -> Self {
        Self {
            description: req.description,
            transaction_date: req.transaction_date,
            amount_in_cents: req.amount_in_cents,
        }
    }
}

/// Response for a stored transaction.
#[derive(Debug, Serialize)]
pub struct StoreTransactionResponse {
    /// Generated id.
    pub id: TransactionId,
}

/// Query parameter naming the target country of a fetch.
pub const COUNTRY_PARAM: &str = "country";

/// Response wrapper for a fetched transaction.
#[derive(Debug, Serialize)]
pub struct FetchTransactionResponse {
    /// The converted transaction.
    pub transaction: TransactionResponse,
}

/// A transaction with its converted amount.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Transaction id.
    pub id: TransactionId,
    /// Description.
    pub description: String,
    /// Date in `YYYY-MM-DD` form.
    pub transaction_date: String,
    /// Original and converted amounts.
    pub amount: AmountResponse,
}

/// Original and converted amounts with the rate applied.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountResponse {
    /// Original amount in US cents.
    pub usd_amount_in_cents: i64,
    /// Amount in the target currency's minor units.
    pub converted_amount_in_cents: i64,
    /// Rate applied, as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub exchange_rate: Decimal,
}

impl From<ConvertedTransaction> for TransactionResponse {
    fn from(tx: ConvertedTransaction) -> Self {
        Self {
            id: tx.id,
            description: tx.description,
            transaction_date: format_date(tx.transaction_date),
            amount: AmountResponse {
                usd_amount_in_cents: tx.usd_amount_in_cents,
                converted_amount_in_cents: tx.converted_amount_in_cents,
                exchange_rate: tx.exchange_rate,
            },
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /transaction
async fn store_transaction(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StoreTransactionRequest>,
) -> Result<Json<StoreTransactionResponse>, ApiError> {
    let id = state.transactions.store(req.into()).await?;
    info!(transaction_id = %id, "Transaction stored");
    Ok(Json(StoreTransactionResponse { id }))
}

/// GET /transaction/{id}?country=
///
/// A repeated `country` uses the first value; an absent one is empty.
async fn fetch_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: QueryPairs,
) -> Result<Json<FetchTransactionResponse>, ApiError> {
    let id = TransactionId::from(id);
    let country = query.first(COUNTRY_PARAM).unwrap_or_default();

    let converted = state.transactions.fetch(&id, country).await?;
    Ok(Json(FetchTransactionResponse {
        transaction: converted.into(),
    }))
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::create_router;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use chrono::NaiveDate;
    use fxledger_core::currency::{
        CurrencyError, ExchangeRateRecord, ExchangeRateResolver, ExchangeService,
        StaticExchangeRateResolver,
    };
    use fxledger_core::transaction::{SequentialIdGenerator, TransactionService};
    use fxledger_db::InMemoryTransactionRepository;
    use http_body_util::BodyExt;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct BrokenResolver;

    #[async_trait]
    impl ExchangeRateResolver for BrokenResolver {
        async fn find_by_country(
            &self,
            _country: &str,
            _oldest: NaiveDate,
        ) -> Result<Option<ExchangeRateRecord>, CurrencyError> {
            Err(CurrencyError::Transport("connection reset by peer".into()))
        }
    }

    fn app_with(resolver: Arc<dyn ExchangeRateResolver>) -> Router {
        let repository = InMemoryTransactionRepository::new(Arc::new(SequentialIdGenerator::new()));
        let service = TransactionService::new(Arc::new(repository), ExchangeService::new(resolver));
        create_router(AppState::new(service))
    }

    fn app() -> Router {
        let rates = StaticExchangeRateResolver::new()
            .with_rate("Brazil", ymd(2023, 3, 31), dec!(0.345))
            .with_rate("Mexico", ymd(2021, 12, 31), dec!(20.5));
        app_with(Arc::new(rates))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/transaction")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn store_holiday(app: &Router) -> String {
        let (status, body) = send(
            app,
            post_json(
                r#"{"description":"A holiday somewhere nice","transactionDate":"2023-05-01","amountInCents":100}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_store_then_fetch_converted() {
        let app = app();

        let id = store_holiday(&app).await;
        assert_eq!(id, "sequentialID-1");

        let (status, body) = send(&app, get(&format!("/transaction/{id}?country=Brazil"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "transaction": {
                    "id": "sequentialID-1",
                    "description": "A holiday somewhere nice",
                    "transactionDate": "2023-05-01",
                    "amount": {
                        "usdAmountInCents": 100,
                        "convertedAmountInCents": 35,
                        "exchangeRate": 0.345
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_store_malformed_json_is_bad_request() {
        let (status, body) = send(&app(), post_json(r#"{"description":"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "BAD_REQUEST"}));
    }

    #[tokio::test]
    async fn test_store_wrong_type_is_bad_request() {
        let (status, body) = send(&app(), post_json(r#"{"amountInCents":"lots"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "BAD_REQUEST"}));
    }

    #[tokio::test]
    async fn test_store_empty_body_lists_required_fields() {
        let (status, body) = send(&app(), post_json("{}")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "message": "VALIDATION_ERROR",
                "fields": [
                    {"fieldName": "description", "reason": "REQUIRED"},
                    {"fieldName": "transactionDate", "reason": "REQUIRED"},
                    {"fieldName": "amountInCents", "reason": "REQUIRED"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_store_invalid_values() {
        let (status, body) = send(
            &app(),
            post_json(r#"{"description":"","transactionDate":"01/05/2023","amountInCents":0}"#),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["fields"],
            json!([
                {"fieldName": "description", "reason": "MIN_LENGTH"},
                {"fieldName": "transactionDate", "reason": "DATE_BAD_FORMAT"},
                {"fieldName": "amountInCents", "reason": "ZERO_VALUE"}
            ])
        );
    }

    #[tokio::test]
    async fn test_fetch_short_country_is_validation_error() {
        let app = app();
        let id = store_holiday(&app).await;

        let (status, body) = send(&app, get(&format!("/transaction/{id}?country=a"))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "message": "VALIDATION_ERROR",
                "fields": [{"fieldName": "country", "reason": "MIN_LENGTH"}]
            })
        );
    }

    #[tokio::test]
    async fn test_fetch_without_country_is_min_length() {
        let app = app();
        let id = store_holiday(&app).await;

        let (status, body) = send(&app, get(&format!("/transaction/{id}"))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["fields"][0]["reason"], "MIN_LENGTH");
    }

    #[tokio::test]
    async fn test_fetch_repeated_country_uses_first_value() {
        let app = app();
        let id = store_holiday(&app).await;

        let (status, body) = send(
            &app,
            get(&format!("/transaction/{id}?country=Brazil&country=Mexico")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction"]["amount"]["convertedAmountInCents"], 35);
        assert_eq!(body["transaction"]["amount"]["exchangeRate"], json!(0.345));
    }

    #[tokio::test]
    async fn test_fetch_repeated_country_first_value_is_validated() {
        let app = app();
        let id = store_holiday(&app).await;

        let (status, body) =
            send(&app, get(&format!("/transaction/{id}?country=B&country=Brazil"))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "message": "VALIDATION_ERROR",
                "fields": [{"fieldName": "country", "reason": "MIN_LENGTH"}]
            })
        );
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_is_not_found() {
        let (status, body) = send(&app(), get("/transaction/nope?country=Brazil")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({"message": "TRANSACTION_NOT_FOUND"}));
    }

    #[tokio::test]
    async fn test_fetch_without_rate_in_window() {
        let app = app();
        let id = store_holiday(&app).await;

        // Mexico's only rate predates the six-month window.
        for country in ["Mexico", "Atlantis"] {
            let (status, body) =
                send(&app, get(&format!("/transaction/{id}?country={country}"))).await;

            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(
                body,
                json!({"message": "UNABLE_TO_CONVERT_TO_TARGET_CURRENCY"})
            );
        }
    }

    #[tokio::test]
    async fn test_rate_source_failure_is_system_error() {
        let app = app_with(Arc::new(BrokenResolver));
        let id = store_holiday(&app).await;

        let (status, body) = send(&app, get(&format!("/transaction/{id}?country=Brazil"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "SYSTEM_ERROR"}));
    }
}
