//! Latest closing price.

use crate::round2;
use chrono::Days;
use serde::{Deserialize, Serialize};
use stalwart_traits::{Date, MetricError, PriceSeries, Result};

/// A close price picked from a series, with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPrice {
    /// Date of the quote that was used.
    pub date: Date,
    /// Close price, rounded to two decimals.
    pub close: f64,
    /// Whether the reference date was missing and another quote was used.
    pub substituted: bool,
}

/// The date whose close is looked up first: `as_of` minus `lag_days`.
///
/// A one-day lag keeps partial intraday data out of the evaluation. Falls back
/// to `as_of` if the subtraction would leave the calendar range.
#[must_use]
pub fn reference_date(as_of: Date, lag_days: u32) -> Date {
    as_of
        .checked_sub_days(Days::new(u64::from(lag_days)))
        .unwrap_or(as_of)
}

/// Close price for `reference`, or the first available quote.
///
/// When the reference date is absent (market closed, data not yet settled)
/// the first quote in provider order is used instead. The series is never
/// re-sorted: providers that list newest first therefore yield the most
/// recent close. The substitution is flagged on the result and logged.
///
/// # Errors
///
/// Returns [`MetricError::NoPriceData`] if the series is empty.
pub fn latest_price(series: &PriceSeries, reference: Date) -> Result<ResolvedPrice> {
    if let Some(quote) = series.get(reference) {
        return Ok(ResolvedPrice {
            date: quote.date,
            close: round2(quote.close),
            substituted: false,
        });
    }

    let quote = series.first().ok_or(MetricError::NoPriceData)?;
    tracing::warn!(
        reference = %reference,
        used = %quote.date,
        "no close for reference date, using first available quote"
    );
    Ok(ResolvedPrice {
        date: quote.date,
        close: round2(quote.close),
        substituted: true,
    })
}
