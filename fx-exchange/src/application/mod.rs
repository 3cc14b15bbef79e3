pub mod ports;
pub mod quote_service;

pub use ports::{QuotePublisher, QuoteRepository, QuoteStream, StoreError};
pub use quote_service::{CreateQuoteCommand, ProfileQuery, QuoteService, ServiceError};
