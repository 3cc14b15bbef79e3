mod quote_publisher;
mod quote_repository;

pub use quote_publisher::{QuotePublisher, QuoteStream};
pub use quote_repository::{QuoteRepository, StoreError};
