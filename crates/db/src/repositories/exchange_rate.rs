//! Exchange rate repository backed by the US Treasury "rates of exchange"
//! dataset.
//!
//! One lookup is one HTTP GET asking for the newest record for a country
//! dated on or after a cutoff. The dataset reports the foreign-currency units
//! bought by one US dollar.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use fxledger_core::currency::{
    CurrencyError, ExchangeRateRecord, ExchangeRateResolver, select_most_recent,
};
use fxledger_shared::types::format_date;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};
use url::form_urlencoded;

const PAGE_SIZE: u32 = 1;
const PAGE_NUMBER: u32 = 1;

/// Response envelope of the rates dataset.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    data: Vec<RateRow>,
}

/// One row of the dataset. Both fields arrive as strings.
#[derive(Debug, Deserialize)]
struct RateRow {
    record_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    exchange_rate: Decimal,
}

impl From<RateRow> for ExchangeRateRecord {
    fn from(row: RateRow) -> Self {
        Self::new(row.record_date, row.exchange_rate)
    }
}

/// Exchange-rate resolver that queries the Treasury fiscal data API.
#[derive(Debug, Clone)]
pub struct TreasuryExchangeRateRepository {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl TreasuryExchangeRateRepository {
    /// Creates a repository targeting `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CurrencyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CurrencyError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Builds the query URL for `country` with records no older than `oldest`.
    #[must_use]
    pub fn query_url(&self, country: &str, oldest: NaiveDate) -> String {
        let country: String = form_urlencoded::byte_serialize(country.as_bytes()).collect();
        format!(
            "{}?sort=-record_date&format=json&filter=record_date:gte:{},country:eq:{}&page[size]={PAGE_SIZE}&page[number]={PAGE_NUMBER}",
            self.base_url,
            format_date(oldest),
            country,
        )
    }

    fn transport_error(&self, err: &reqwest::Error) -> CurrencyError {
        if err.is_timeout() {
            CurrencyError::Timeout(self.timeout)
        } else {
            CurrencyError::Transport(err.to_string())
        }
    }
}

/// Parses a dataset body into the newest qualifying record.
fn parse_rates(body: &str, oldest: NaiveDate) -> Result<Option<ExchangeRateRecord>, CurrencyError> {
    let response: RatesResponse =
        serde_json::from_str(body).map_err(|e| CurrencyError::MalformedPayload(e.to_string()))?;

    Ok(select_most_recent(
        response.data.into_iter().map(ExchangeRateRecord::from),
        oldest,
    ))
}

#[async_trait]
impl ExchangeRateResolver for TreasuryExchangeRateRepository {
    async fn find_by_country(
        &self,
        country: &str,
        oldest: NaiveDate,
    ) -> Result<Option<ExchangeRateRecord>, CurrencyError> {
        let url = self.query_url(country, oldest);
        debug!(%country, %oldest, "Querying exchange rate source");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            warn!(%country, status = status.as_u16(), "Exchange rate source rejected request");
            return Err(CurrencyError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let record = parse_rates(&body, oldest)?;
        match &record {
            Some(found) => {
                debug!(%country, record_date = %found.record_date, rate = %found.rate, "Exchange rate found");
            }
            None => debug!(%country, %oldest, "No exchange rate in window"),
        }
        Ok(record)
    }
}
