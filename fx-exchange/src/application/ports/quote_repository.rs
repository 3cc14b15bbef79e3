use async_trait::async_trait;
use chrono::NaiveDateTime;
use fx_core::{NewQuote, Quote};
use thiserror::Error;

/// Failure reported by the underlying persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable table of quotes
///
/// The store assigns identifiers on save. Range queries are inclusive
/// on both ends.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// All stored quotes, in store iteration order
    async fn find_all(&self) -> Result<Vec<Quote>, StoreError>;

    /// Persist a quote and return it with its new identifier
    async fn save(&self, quote: NewQuote) -> Result<Quote, StoreError>;

    /// Quotes with `start <= date_time <= end`
    async fn find_by_date_time_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Quote>, StoreError>;

    /// Remove every quote, returning how many were deleted
    async fn delete_all(&self) -> Result<u64, StoreError>;
}
