mod quote;

pub use quote::{NewQuote, Quote, QuoteId};
