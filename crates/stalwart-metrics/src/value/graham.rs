//! Graham number intrinsic-value estimate.

use crate::round2;
use serde::{Deserialize, Serialize};
use stalwart_traits::{MetricError, Result};

/// Classical multiplier: a P/E ceiling of 15 times a P/B ceiling of 1.5.
pub const CLASSIC_MULTIPLIER: f64 = 22.5;

/// Default multiplier: a P/E ceiling of 16 times a P/B ceiling of 1.5.
pub const DEFENSIVE_MULTIPLIER: f64 = 24.0;

/// Configuration for the Graham number.
///
/// The multiplier is the product of the highest P/E and P/B an investor is
/// willing to pay. It is a tunable policy, not a law: [`CLASSIC_MULTIPLIER`]
/// reproduces the textbook formula, while the default
/// [`DEFENSIVE_MULTIPLIER`] tolerates a P/E of 16 to match the rating's P/E
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrahamConfig {
    /// Product of the P/E and P/B ceilings (default: 24.0)
    pub multiplier: f64,
}

impl GrahamConfig {
    /// Create a configuration with a custom multiplier.
    #[must_use]
    pub const fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// The textbook 22.5 multiplier.
    #[must_use]
    pub const fn classic() -> Self {
        Self::new(CLASSIC_MULTIPLIER)
    }
}

impl Default for GrahamConfig {
    fn default() -> Self {
        Self::new(DEFENSIVE_MULTIPLIER)
    }
}

/// Graham number: `sqrt(multiplier * eps * bvps)`, rounded to two decimals.
///
/// # Errors
///
/// - [`MetricError::InvalidInput`] if the multiplier is not a positive number
/// - [`MetricError::Domain`] if `eps * bvps` is negative (no real root) or the
///   product is not finite
pub fn graham_number(eps: f64, bvps: f64, config: &GrahamConfig) -> Result<f64> {
    if !(config.multiplier.is_finite() && config.multiplier > 0.0) {
        return Err(MetricError::InvalidInput(format!(
            "Graham multiplier must be positive, got {}",
            config.multiplier
        )));
    }

    let product = config.multiplier * eps * bvps;
    if !product.is_finite() {
        return Err(MetricError::Domain(format!(
            "Graham product of eps {eps} and book value {bvps} is not finite"
        )));
    }
    if product < 0.0 {
        return Err(MetricError::Domain(format!(
            "negative Graham product: eps {eps} x book value {bvps}"
        )));
    }

    Ok(round2(product.sqrt()))
}
