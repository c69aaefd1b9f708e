//! Data provider traits.
//!
//! The metric engine never fetches anything itself. Each external data source
//! implements one or more of these traits, and the evaluator receives the
//! implementations as parameters. Tests substitute in-memory fixtures.

use crate::{FinancialHistory, MarketSnapshot, PriceSeries, ProviderResult};
use std::future::Future;

/// Source of per-year financial statement data.
pub trait FinancialHistoryProvider: Send + Sync {
    /// Fetch per-year records for `ticker`, oldest first.
    ///
    /// `periods` is a hint for how many recent years the caller needs;
    /// providers may return more.
    fn fetch_financial_history(
        &self,
        ticker: &str,
        periods: usize,
    ) -> impl Future<Output = ProviderResult<FinancialHistory>> + Send;
}

/// Source of daily closing prices.
pub trait PriceSeriesProvider: Send + Sync {
    /// Fetch daily closes for `ticker`, in the provider's native order.
    fn fetch_price_series(
        &self,
        ticker: &str,
    ) -> impl Future<Output = ProviderResult<PriceSeries>> + Send;
}

/// Source of current market statistics.
pub trait MarketStatisticsProvider: Send + Sync {
    /// Fetch the current P/E ratio and dividend yield for `ticker`.
    fn fetch_market_snapshot(
        &self,
        ticker: &str,
    ) -> impl Future<Output = ProviderResult<MarketSnapshot>> + Send;
}

/// A single source that supplies all three kinds of data.
pub trait DataProvider:
    FinancialHistoryProvider + PriceSeriesProvider + MarketStatisticsProvider
{
}

impl<T> DataProvider for T where
    T: FinancialHistoryProvider + PriceSeriesProvider + MarketStatisticsProvider
{
}
