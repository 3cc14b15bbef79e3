use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::values::Rate;

/// Store-assigned quote identifier
pub type QuoteId = i64;

/// A buy/sell price pair observed at a point in time.
///
/// Once persisted the identifier never changes; quotes are never
/// updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub buy: Rate,
    pub sell: Rate,
    pub date_time: NaiveDateTime,
}

/// A quote that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    pub buy: Rate,
    pub sell: Rate,
    pub date_time: NaiveDateTime,
}

impl NewQuote {
    pub fn new(buy: Rate, sell: Rate, date_time: NaiveDateTime) -> Self {
        NewQuote {
            buy,
            sell,
            date_time,
        }
    }

    /// Build from optional parts, failing on the first missing field.
    pub fn from_parts(
        buy: Option<Rate>,
        sell: Option<Rate>,
        date_time: Option<NaiveDateTime>,
    ) -> Result<Self, DomainError> {
        let buy = buy.ok_or(DomainError::MissingField("buy"))?;
        let sell = sell.ok_or(DomainError::MissingField("sell"))?;
        let date_time = date_time.ok_or(DomainError::MissingField("dateTime"))?;
        Ok(NewQuote::new(buy, sell, date_time))
    }

    /// Attach the identifier assigned by the store
    pub fn with_id(self, id: QuoteId) -> Quote {
        Quote {
            id,
            buy: self.buy,
            sell: self.sell,
            date_time: self.date_time,
        }
    }
}

impl From<Quote> for NewQuote {
    fn from(quote: Quote) -> Self {
        NewQuote::new(quote.buy, quote.sell, quote.date_time)
    }
}
