//! Rounding helpers.

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
