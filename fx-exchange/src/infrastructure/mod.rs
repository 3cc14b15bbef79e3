pub mod config;
pub mod event_publisher;
pub mod repositories;
pub mod seed;

pub use config::{ConfigError, ServiceConfig, StorageBackend};
pub use event_publisher::{BroadcastQuoteHub, QuoteSubscription};
pub use repositories::{InMemoryQuoteRepository, SqliteQuoteRepository};
pub use seed::seed_quotes;
