//! Application configuration management.

use std::time::Duration;

use serde::Deserialize;

/// Default location of the US Treasury "rates of exchange" dataset.
pub const TREASURY_RATES_URL: &str =
    "https://api.fiscaldata.treasury.gov/services/api/fiscal_service/v1/accounting/od/rates_of_exchange";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream exchange-rate source configuration.
    #[serde(default)]
    pub exchange_rates: ExchangeRateConfig,
    /// Transaction identifier configuration.
    #[serde(default)]
    pub ids: IdConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Exchange-rate source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateConfig {
    /// Base URL of the rates dataset, without a query string.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound for a single lookup, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ExchangeRateConfig {
    /// Returns the lookup timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ExchangeRateConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    TREASURY_RATES_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

/// Strategy used to mint transaction identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUIDs.
    #[default]
    Uuid,
    /// Predictable `sequentialID-N` values, for integration environments.
    Sequential,
}

/// Transaction identifier configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdConfig {
    /// Which generator to wire in.
    #[serde(default)]
    pub strategy: IdStrategy,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FXLEDGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
