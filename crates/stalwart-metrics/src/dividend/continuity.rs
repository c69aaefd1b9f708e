//! Consecutive dividend increases.

use super::trailing;
use stalwart_traits::Result;

/// Whether the dividend strictly increased in every year of the window.
///
/// Walks the most recent `periods` values in chronological order against a
/// running maximum that starts at zero. The first value that does not exceed
/// the running maximum ends the scan with `false`, so a flat year counts as a
/// break just like a cut, and so does a zero first dividend.
///
/// # Errors
///
/// Returns [`MetricError::InsufficientHistory`] when the series is shorter
/// than `periods` or `periods` is zero.
///
/// [`MetricError::InsufficientHistory`]: stalwart_traits::MetricError::InsufficientHistory
pub fn continuous_dividend_increase(dividends: &[f64], periods: usize) -> Result<bool> {
    let window = trailing(dividends, periods)?;

    let mut running_max = 0.0;
    for &dividend in window {
        if dividend > running_max {
            running_max = dividend;
        } else {
            return Ok(false);
        }
    }
    Ok(true)
}
