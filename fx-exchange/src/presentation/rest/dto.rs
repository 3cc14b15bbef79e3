use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fx_core::{ProfileResult, Quote, QuoteId, Rate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::{CreateQuoteCommand, ProfileQuery};
use crate::presentation::rest::ApiError;

/// Quote as exposed over HTTP and SSE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub id: QuoteId,
    pub buy: Rate,
    pub sell: Rate,
    pub date_time: NaiveDateTime,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        QuoteResponse {
            id: quote.id,
            buy: quote.buy,
            sell: quote.sell,
            date_time: quote.date_time,
        }
    }
}

/// Body of `POST /api/exchange`
///
/// All fields are optional at the parsing stage so that a missing value
/// surfaces as a validation error naming the field. Any `id` sent by the
/// client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub buy: Option<Rate>,
    #[serde(default)]
    pub sell: Option<Rate>,
    #[serde(default, deserialize_with = "deserialize_date_time")]
    pub date_time: Option<NaiveDateTime>,
}

impl From<CreateQuoteRequest> for CreateQuoteCommand {
    fn from(request: CreateQuoteRequest) -> Self {
        CreateQuoteCommand {
            buy: request.buy,
            sell: request.sell,
            date_time: request.date_time,
        }
    }
}

/// Accepts `2025-05-09T18:14:01.184`, `2025-05-09 18:14:01` and RFC 3339
/// timestamps; an offset is dropped and the wall-clock time kept.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

fn deserialize_date_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_date_time(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid dateTime '{}'", raw))),
    }
}

/// Query string of `GET /api/exchange/profile/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSearchParams {
    pub profile: Option<String>,
    pub date: Option<String>,
}

impl ProfileSearchParams {
    pub fn into_query(self) -> Result<ProfileQuery, ApiError> {
        let profile = self
            .profile
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::missing_parameter("profile"))?;
        let raw_date = self
            .date
            .filter(|d| !d.is_empty())
            .ok_or_else(|| ApiError::missing_parameter("date"))?;
        let date = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::invalid_parameter("date", "expected YYYY-MM-DD"))?;

        Ok(ProfileQuery { profile, date })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub buy: Rate,
    pub sell: Rate,
}

impl From<ProfileResult> for ProfileResponse {
    fn from(result: ProfileResult) -> Self {
        ProfileResponse {
            buy: result.buy,
            sell: result.sell,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
