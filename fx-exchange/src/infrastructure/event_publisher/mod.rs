mod broadcast;

pub use broadcast::{BroadcastQuoteHub, QuoteSubscription};
