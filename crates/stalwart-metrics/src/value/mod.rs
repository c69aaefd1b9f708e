//! Value metrics comparing price to an intrinsic-value estimate.
//!
//! - Graham number: `sqrt(k * EPS * BVPS)`, a simplified intrinsic value
//! - Discount: how far the price sits below (or above) the Graham number

mod discount;
mod graham;

pub use discount::discount_rate;
pub use graham::{CLASSIC_MULTIPLIER, DEFENSIVE_MULTIPLIER, GrahamConfig, graham_number};
