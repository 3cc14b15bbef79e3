use async_trait::async_trait;
use futures_util::Stream;
use fx_core::Quote;
use std::pin::Pin;

/// Live sequence of quotes delivered to one subscriber
pub type QuoteStream = Pin<Box<dyn Stream<Item = Quote> + Send>>;

/// Publisher for newly persisted quotes
///
/// Delivery is multicast with no replay: a subscriber only sees quotes
/// published after it subscribed. Publishing never fails, even with no
/// subscribers.
#[async_trait]
pub trait QuotePublisher: Send + Sync {
    /// Publish a quote to all current subscribers
    async fn publish(&self, quote: Quote);

    /// Open a new subscription
    fn subscribe(&self) -> QuoteStream;

    /// Get the number of active subscribers
    fn subscriber_count(&self) -> usize;
}
