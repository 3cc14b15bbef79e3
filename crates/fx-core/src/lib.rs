//! FX Core Domain
//!
//! Pure domain types for the FX quote exchange.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod aggregation;
pub mod entities;
pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use aggregation::{ProfileResult, aggregate, aggregate_tagged, round_half_up};
pub use entities::{NewQuote, Quote, QuoteId};
pub use error::DomainError;
pub use values::{DayWindow, Profile, Rate};
