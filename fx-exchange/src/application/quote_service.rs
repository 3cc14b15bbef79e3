use chrono::{NaiveDate, NaiveDateTime};
use fx_core::{DayWindow, DomainError, NewQuote, Profile, ProfileResult, Quote, Rate, aggregate};
use std::sync::Arc;
use thiserror::Error;

use crate::application::ports::{QuotePublisher, QuoteRepository, QuoteStream, StoreError};

/// Request to create a quote; every field is required
#[derive(Debug, Clone, Default)]
pub struct CreateQuoteCommand {
    pub buy: Option<Rate>,
    pub sell: Option<Rate>,
    pub date_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct ProfileQuery {
    pub profile: String,
    pub date: NaiveDate,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(DomainError),

    #[error("invalid argument: {0}")]
    InvalidArgument(DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Coordinates the quote store, the live publisher and profile aggregation
#[derive(Clone)]
pub struct QuoteService {
    repository: Arc<dyn QuoteRepository>,
    publisher: Arc<dyn QuotePublisher>,
}

impl QuoteService {
    pub fn new(repository: Arc<dyn QuoteRepository>, publisher: Arc<dyn QuotePublisher>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Full quote history
    pub async fn list_all(&self) -> Result<Vec<Quote>, ServiceError> {
        let quotes = self.repository.find_all().await?;
        tracing::debug!(count = quotes.len(), "listed quotes");
        Ok(quotes)
    }

    /// Validate, persist, then publish.
    ///
    /// The saved quote (with its identifier) is published exactly once, and
    /// only after the store accepted it.
    pub async fn create(&self, command: CreateQuoteCommand) -> Result<Quote, ServiceError> {
        let new_quote = NewQuote::from_parts(command.buy, command.sell, command.date_time)
            .map_err(ServiceError::Validation)?;

        let saved = self
            .repository
            .save(new_quote)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "failed to save quote"))?;

        tracing::info!(
            id = saved.id,
            buy = saved.buy,
            sell = saved.sell,
            date_time = %saved.date_time,
            "quote created"
        );

        self.publisher.publish(saved.clone()).await;
        Ok(saved)
    }

    /// Subscribe to quotes created from now on
    pub fn stream_live(&self) -> QuoteStream {
        let stream = self.publisher.subscribe();
        tracing::debug!(
            subscribers = self.publisher.subscriber_count(),
            "live subscriber attached"
        );
        stream
    }

    /// Aggregate the quotes of one calendar day.
    ///
    /// An unknown profile tag is rejected before the store is queried.
    pub async fn profile(&self, query: ProfileQuery) -> Result<ProfileResult, ServiceError> {
        let profile: Profile = query
            .profile
            .parse()
            .map_err(ServiceError::InvalidArgument)?;

        let window = DayWindow::for_date(query.date);
        let quotes = self
            .repository
            .find_by_date_time_between(window.start, window.end)
            .await?;

        let result = aggregate(profile, &quotes);
        tracing::debug!(
            %profile,
            date = %query.date,
            quotes = quotes.len(),
            buy = result.buy,
            sell = result.sell,
            "profile computed"
        );
        Ok(result)
    }
}
