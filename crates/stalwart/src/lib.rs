#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stalwart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! ## Quick Start
//!
//! ```ignore
//! use stalwart::prelude::*;
//! use stalwart::fmp::FmpClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let evaluator = Evaluator::new(FmpClient::from_env()?, EvaluationConfig::default());
//! let today = chrono::Local::now().date_naive();
//!
//! let metrics = evaluator.evaluate_ticker("JNJ", 5, None, today).await?;
//! println!("{}: {} ({:.2}% discount)", metrics.ticker, metrics.rating, metrics.discount);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! 1. **Providers** fetch raw data behind the traits in [`traits`]
//! 2. **Metrics** derive single numbers from that data, without I/O
//! 3. **Evaluation** derives every metric for a ticker, all or nothing
//! 4. **Rating** counts how many of seven threshold rules hold

/// Version information for the stalwart crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core data model, errors and provider traits.
pub mod traits {
    pub use stalwart_traits::*;
}

/// Pure metric derivation.
///
/// ## Graham Number
///
/// ```text
/// graham = sqrt(k * EPS * BVPS)
/// ```
///
/// `k` defaults to 24 (a P/E ceiling of 16 times a P/B ceiling of 1.5); the
/// textbook value is 22.5.
///
/// ## Discount
///
/// ```text
/// graham > price:  (graham - price) / graham * 100
/// otherwise:      -(price - graham) / price * 100
/// ```
pub mod metrics {
    pub use stalwart_metrics::*;
}

/// Rating rules and evaluation.
pub mod eval {
    pub use stalwart_eval::*;
}

/// Financial Modeling Prep (FMP) data provider.
///
/// ## Setup
///
/// 1. Get an API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add to `.env` file
pub mod fmp {
    pub use stalwart_fmp::*;
}

// Re-export the evaluation entry points at top level
pub use stalwart_eval::{DerivedMetrics, EvaluationConfig, Evaluator, Rating, RatingCriteria};
pub use stalwart_traits::{EvaluationError, MetricError, ProviderError, Security};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use stalwart::prelude::*;
/// ```
pub mod prelude {
    pub use crate::traits::{
        DataProvider, FinancialHistoryProvider, MarketStatisticsProvider, PriceSeriesProvider,
    };
    pub use crate::{
        DerivedMetrics, EvaluationConfig, EvaluationError, Evaluator, Rating, RatingCriteria,
        Security,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_provider<P: prelude::DataProvider>(_provider: &P) {}
        fn _accept_evaluator<P: prelude::DataProvider>(_evaluator: &Evaluator<P>) {}

        let _criteria = RatingCriteria::default();
        let _config = EvaluationConfig::default();
        let _security = Security::new("jnj", traits::DEFAULT_PERIODS);
        let _graham = metrics::GrahamConfig::default();
    }
}
