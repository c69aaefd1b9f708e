//! Discount of price to the Graham number.

use crate::round2;
use stalwart_traits::{MetricError, Result};

/// Signed discount of `price` to `graham_number`, in percent.
///
/// Positive values mean the stock trades below the estimate:
/// `(graham - price) / graham * 100`. Otherwise the premium is negated and
/// measured against the **price**, not the estimate:
/// `-(price - graham) / price * 100`. The two branches use different
/// denominators and the rating's discount rule depends on the exact values,
/// so the asymmetry is kept as is.
///
/// # Errors
///
/// Returns [`MetricError::DivisionByZero`] when the price is zero and not
/// below the estimate (i.e. both are zero).
pub fn discount_rate(price: f64, graham_number: f64) -> Result<f64> {
    if graham_number > price {
        let difference = graham_number - price;
        return Ok(round2(difference / graham_number * 100.0));
    }

    if price == 0.0 {
        return Err(MetricError::DivisionByZero("price is zero"));
    }
    let difference = price - graham_number;
    Ok(-round2(difference / price * 100.0))
}
