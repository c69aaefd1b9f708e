//! Dividend metrics over the lookback window.
//!
//! Both metrics take the annual dividend-per-share series, oldest first, and
//! look only at its most recent `periods` values:
//! - Continuity: whether the dividend rose every single year
//! - Growth: compound annual growth rate of the dividend

mod continuity;
mod growth;

pub use continuity::continuous_dividend_increase;
pub use growth::dividend_cagr;

use stalwart_traits::{MetricError, Result};

/// The most recent `periods` values of `series`.
fn trailing(series: &[f64], periods: usize) -> Result<&[f64]> {
    if periods == 0 || series.len() < periods {
        return Err(MetricError::InsufficientHistory {
            required: periods,
            available: series.len(),
        });
    }
    Ok(&series[series.len() - periods..])
}
