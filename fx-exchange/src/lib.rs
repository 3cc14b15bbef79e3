//! FX Quote Exchange
//!
//! A reactive service for currency exchange quotes: clients submit buy/sell
//! quotes, read the full history, follow newly created quotes live over
//! server-sent events, and ask for a per-day profile summary.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain** (`fx-core`): Quote, Profile, day window and aggregation
//! - **Application**: `QuoteService` and the port traits it drives
//! - **Infrastructure**: in-memory and SQLite stores, broadcast hub, config, seeding
//! - **Presentation**: REST handlers and the SSE stream
//!
//! # Example
//!
//! ```ignore
//! use fx_exchange::{QuoteExchange, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), fx_exchange::ExchangeError> {
//!     let exchange = QuoteExchange::from_config(ServiceConfig::with_sample_quotes()).await?;
//!     exchange.run().await
//! }
//! ```

pub mod application;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use fx_core::{DayWindow, NewQuote, Profile, ProfileResult, Quote, QuoteId};

pub use application::{
    CreateQuoteCommand, ProfileQuery, QuotePublisher, QuoteRepository, QuoteService, QuoteStream,
    ServiceError, StoreError,
};

pub use infrastructure::{
    BroadcastQuoteHub, ConfigError, InMemoryQuoteRepository, ServiceConfig, SqliteQuoteRepository,
    StorageBackend, seed_quotes,
};

pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// The quote exchange server
pub struct QuoteExchange {
    pub config: ServiceConfig,
    pub repository: Arc<dyn QuoteRepository>,
    pub hub: Arc<BroadcastQuoteHub>,
}

impl QuoteExchange {
    /// Build around an existing store; nothing is seeded
    pub fn with_repository(config: ServiceConfig, repository: Arc<dyn QuoteRepository>) -> Self {
        QuoteExchange {
            config,
            repository,
            hub: Arc::new(BroadcastQuoteHub::new()),
        }
    }

    /// Open the configured store, create its schema and load the seed quotes
    pub async fn from_config(config: ServiceConfig) -> Result<Self, ExchangeError> {
        let repository: Arc<dyn QuoteRepository> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryQuoteRepository::new()),
            StorageBackend::Sqlite => Arc::new(
                SqliteQuoteRepository::connect(
                    &config.storage.url,
                    config.storage.max_connections,
                )
                .await?,
            ),
        };

        let exchange = Self::with_repository(config, repository);
        seed_quotes(exchange.repository.as_ref(), &exchange.config.seed).await?;
        Ok(exchange)
    }

    pub fn service(&self) -> QuoteService {
        QuoteService::new(Arc::clone(&self.repository), self.hub.clone())
    }

    /// Create the HTTP router
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState::new(
            self.service(),
            self.config.server.keep_alive(),
        ));
        create_router(state)
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn run(self) -> Result<(), ExchangeError> {
        let addr = self.config.bind_address();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Quote exchange listening on {}", addr);

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// Live subscribers are disconnected on shutdown so open SSE responses
    /// finish instead of holding the server open.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ExchangeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        let hub = Arc::clone(&self.hub);

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutting down quote exchange");
                hub.close();
            })
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
