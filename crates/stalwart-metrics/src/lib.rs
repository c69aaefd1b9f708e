//! Fundamental metric derivation for the stalwart screener.
//!
//! Every function in this crate is pure: it takes data that has already been
//! fetched and returns a single number (or flag), never performing I/O.
//! Metrics are grouped by what they measure:
//! - Dividend: continuity of increases, compound annual growth
//! - Statement: payout ratio and leverage from the latest fiscal year
//! - Value: Graham number and discount to it
//! - Price and snapshot: latest close, P/E and dividend yield parsing
//!
//! # Example
//!
//! ```
//! use stalwart_metrics::value::{GrahamConfig, discount_rate, graham_number};
//!
//! let fair_value = graham_number(4.0, 24.0, &GrahamConfig::default()).unwrap();
//! assert_eq!(fair_value, 48.0);
//! assert_eq!(discount_rate(40.0, fair_value).unwrap(), 16.67);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod dividend;
pub mod price;
pub mod registry;
pub mod rounding;
pub mod snapshot;
pub mod statement;
pub mod value;

// Re-export key types
pub use price::ResolvedPrice;
pub use registry::{MetricCategory, MetricInfo};
pub use rounding::round2;
pub use value::GrahamConfig;
