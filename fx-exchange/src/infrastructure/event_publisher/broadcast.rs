use crate::application::ports::{QuotePublisher, QuoteStream};
use async_trait::async_trait;
use futures_util::Stream;
use fx_core::Quote;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

/// Broadcast hub for live quotes
///
/// Keeps one unbounded channel per subscriber, so a slow reader only grows
/// its own backlog and never holds up the others. Senders whose receiver
/// has been dropped are pruned lazily on publish.
pub struct BroadcastQuoteHub {
    subscribers: Arc<Mutex<Vec<mpsc::UnboundedSender<Quote>>>>,
}

impl BroadcastQuoteHub {
    pub fn new() -> Self {
        BroadcastQuoteHub {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a new subscriber
    pub fn open_subscription(&self) -> QuoteSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        QuoteSubscription { rx }
    }

    /// Fan a quote out to every live subscriber.
    ///
    /// The registry lock is held for the whole fan-out, so concurrent
    /// publishers are delivered in the same order to every subscriber.
    pub fn broadcast(&self, quote: &Quote) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(quote.clone()).is_ok());
        subscribers.len()
    }

    /// Disconnect every subscriber; their streams end after draining
    pub fn close(&self) {
        let mut subscribers = self.subscribers.lock();
        tracing::debug!(subscribers = subscribers.len(), "closing quote hub");
        subscribers.clear();
    }
}

impl Default for BroadcastQuoteHub {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BroadcastQuoteHub {
    fn clone(&self) -> Self {
        BroadcastQuoteHub {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

#[async_trait]
impl QuotePublisher for BroadcastQuoteHub {
    async fn publish(&self, quote: Quote) {
        let delivered = self.broadcast(&quote);
        tracing::debug!(id = quote.id, delivered, "quote broadcast");
    }

    fn subscribe(&self) -> QuoteStream {
        Box::pin(self.open_subscription())
    }

    fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }
}

/// Receiving end of a hub subscription
///
/// Dropping it disconnects the subscriber.
#[derive(Debug)]
pub struct QuoteSubscription {
    rx: mpsc::UnboundedReceiver<Quote>,
}

impl QuoteSubscription {
    /// Wait for the next quote
    pub async fn recv(&mut self) -> Option<Quote> {
        self.rx.recv().await
    }

    /// Take a pending quote without waiting
    pub fn try_recv(&mut self) -> Option<Quote> {
        self.rx.try_recv().ok()
    }
}

impl Stream for QuoteSubscription {
    type Item = Quote;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Quote>> {
        self.rx.poll_recv(cx)
    }
}
