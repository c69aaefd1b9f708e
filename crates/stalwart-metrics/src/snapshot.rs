//! Numbers parsed out of market snapshot fields.
//!
//! Snapshot providers often hand back display strings rather than numbers,
//! e.g. `"3.05 %"` for the dividend yield.

use regex::Regex;
use stalwart_traits::{MarketSnapshot, MetricError, Result};
use std::sync::LazyLock;

/// First decimal number (digits, a point, optional digits) in a string.
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d*").expect("decimal pattern is valid"));

/// Current dividend yield in percent, taken as the first decimal number in
/// the snapshot's free-text field.
///
/// Only numbers with a decimal point qualify: `"3%"` is rejected while
/// `"3.0%"` parses. Providers are expected to put the yield first.
///
/// # Errors
///
/// Returns [`MetricError::UnparsableField`] if the text holds no decimal number.
pub fn dividend_yield(snapshot: &MarketSnapshot) -> Result<f64> {
    let text = snapshot.dividend_yield.as_str();
    DECIMAL
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| MetricError::UnparsableField {
            field: "dividend_yield",
            value: text.to_string(),
        })
}

/// Price to earnings ratio, parsed as a plain number.
///
/// # Errors
///
/// Returns [`MetricError::UnparsableField`] if the field is not a finite number.
pub fn price_to_earnings(snapshot: &MarketSnapshot) -> Result<f64> {
    let text = snapshot.pe_ratio.trim();
    text.parse::<f64>()
        .ok()
        .filter(|pe| pe.is_finite())
        .ok_or_else(|| MetricError::UnparsableField {
            field: "pe_ratio",
            value: snapshot.pe_ratio.clone(),
        })
}
