//! fxledger API Server
//!
//! Main entry point: records purchases in US cents and serves them converted
//! with Treasury exchange rates.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxledger_api::{AppState, create_router};
use fxledger_core::currency::ExchangeService;
use fxledger_core::transaction::{
    IdGenerator, SequentialIdGenerator, TransactionService, UuidIdGenerator,
};
use fxledger_db::{InMemoryTransactionRepository, TreasuryExchangeRateRepository};
use fxledger_shared::{AppConfig, IdStrategy};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxledger=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let id_generator: Arc<dyn IdGenerator> = match config.ids.strategy {
        IdStrategy::Uuid => Arc::new(UuidIdGenerator),
        IdStrategy::Sequential => {
            warn!("Using sequential transaction ids; not for production");
            Arc::new(SequentialIdGenerator::new())
        }
    };

    // Exchange rate source
    let timeout = config.exchange_rates.timeout();
    let rates = TreasuryExchangeRateRepository::new(&config.exchange_rates.base_url, timeout)
        .context("Failed to build exchange rate client")?;
    info!(
        base_url = %config.exchange_rates.base_url,
        timeout_secs = config.exchange_rates.timeout_secs,
        "Exchange rate source configured"
    );

    // Create application state
    let repository = InMemoryTransactionRepository::new(id_generator);
    let exchange = ExchangeService::with_timeout(Arc::new(rates), timeout);
    let state = AppState::new(TransactionService::new(Arc::new(repository), exchange));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
