//! Dividend compound annual growth rate.

use super::trailing;
use crate::round2;
use stalwart_traits::{MetricError, Result};

/// Compound annual growth rate of the dividend over the window, in percent.
///
/// Computes `((last / first) ^ (1 / periods) - 1) * 100` where `first` and
/// `last` are the earliest and latest values of the trailing `periods` years,
/// rounded to two decimals. The exponent uses the number of years in the
/// window rather than the number of intervals between them.
///
/// # Errors
///
/// - [`MetricError::InsufficientHistory`] if fewer than `periods` values exist
/// - [`MetricError::DivisionByZero`] if the first dividend is zero
/// - [`MetricError::Domain`] if the growth factor has no real root
pub fn dividend_cagr(dividends: &[f64], periods: usize) -> Result<f64> {
    let window = trailing(dividends, periods)?;
    let (first, last) = (window[0], window[window.len() - 1]);

    if first == 0.0 {
        return Err(MetricError::DivisionByZero(
            "first dividend of the window is zero",
        ));
    }

    let growth = ((last / first).powf(1.0 / periods as f64) - 1.0) * 100.0;
    if !growth.is_finite() {
        return Err(MetricError::Domain(format!(
            "dividend growth from {first} to {last} has no real compound rate"
        )));
    }

    Ok(round2(growth))
}
