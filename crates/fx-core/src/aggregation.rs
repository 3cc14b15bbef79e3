//! Profile aggregation
//!
//! Reduces a day's quotes to a single buy/sell pair. Each profile maps to
//! one reducer applied independently to the buy and sell columns:
//!
//! | Profile  | Reducer |
//! |----------|---------|
//! | `LOW`    | max     |
//! | `MEDIUM` | mean    |
//! | `HIGH`   | min     |
//!
//! An empty column reduces to `0`. Results are rounded to two decimal
//! places, half-up.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::entities::Quote;
use crate::error::DomainError;
use crate::values::{Profile, Rate};

/// Decimal places kept in a profile result
pub const PROFILE_SCALE: u32 = 2;

/// Aggregated buy/sell pair for one day and one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult {
    pub buy: Rate,
    pub sell: Rate,
}

impl ProfileResult {
    pub const ZERO: ProfileResult = ProfileResult {
        buy: 0.0,
        sell: 0.0,
    };
}

type Reducer = fn(&[Rate]) -> Rate;

fn reducer(profile: Profile) -> Reducer {
    match profile {
        Profile::Low => max,
        Profile::Medium => mean,
        Profile::High => min,
    }
}

fn max(values: &[Rate]) -> Rate {
    values.iter().copied().reduce(Rate::max).unwrap_or(0.0)
}

fn min(values: &[Rate]) -> Rate {
    values.iter().copied().reduce(Rate::min).unwrap_or(0.0)
}

fn mean(values: &[Rate]) -> Rate {
    if values.is_empty() {
        return 0.0;
    }
    // divide first so the partial sums stay within the largest input
    let n = values.len() as Rate;
    values.iter().map(|v| v / n).sum()
}

/// Aggregate `quotes` with the given profile
pub fn aggregate(profile: Profile, quotes: &[Quote]) -> ProfileResult {
    let (buys, sells): (Vec<Rate>, Vec<Rate>) = quotes.iter().map(|q| (q.buy, q.sell)).unzip();
    let reduce = reducer(profile);

    ProfileResult {
        buy: round_half_up(reduce(&buys), PROFILE_SCALE),
        sell: round_half_up(reduce(&sells), PROFILE_SCALE),
    }
}

/// Parse the profile tag, then aggregate
pub fn aggregate_tagged(tag: &str, quotes: &[Quote]) -> Result<ProfileResult, DomainError> {
    let profile = Profile::from_str(tag)?;
    Ok(aggregate(profile, quotes))
}

/// Round to `decimals` places with ties away from zero.
///
/// The value is rounded from its shortest decimal representation, so
/// `100.005` becomes `100.01` even though the nearest binary double sits
/// slightly below the tie. Values outside the decimal range are returned
/// unchanged.
pub fn round_half_up(value: Rate, decimals: u32) -> Rate {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_str(&value.to_string())
        .ok()
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
