//! End-to-end evaluation against in-memory providers.

use approx::assert_relative_eq;
use stalwart_eval::{EvaluationConfig, Evaluator};
use stalwart_traits::{
    Date, EvaluationErrorKind, FinancialHistory, FinancialHistoryProvider, FinancialYearRecord,
    MarketSnapshot, MarketStatisticsProvider, PriceQuote, PriceSeries, PriceSeriesProvider,
    ProviderError, ProviderResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves fixed data and counts how often each endpoint is hit.
#[derive(Debug, Default)]
struct FixtureProvider {
    history: FinancialHistory,
    prices: PriceSeries,
    snapshot: MarketSnapshot,
    fail_prices: bool,
    history_calls: AtomicUsize,
    price_calls: AtomicUsize,
    snapshot_calls: AtomicUsize,
}

impl FinancialHistoryProvider for FixtureProvider {
    async fn fetch_financial_history(
        &self,
        _ticker: &str,
        _periods: usize,
    ) -> ProviderResult<FinancialHistory> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.history.clone())
    }
}

impl PriceSeriesProvider for FixtureProvider {
    async fn fetch_price_series(&self, ticker: &str) -> ProviderResult<PriceSeries> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_prices {
            return Err(ProviderError::SymbolNotFound(ticker.to_string()));
        }
        Ok(self.prices.clone())
    }
}

impl MarketStatisticsProvider for FixtureProvider {
    async fn fetch_market_snapshot(&self, _ticker: &str) -> ProviderResult<MarketSnapshot> {
        self.snapshot_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot.clone())
    }
}

fn date(day: u32) -> Date {
    Date::from_ymd_opt(2024, 6, day).unwrap()
}

fn year(fiscal_year: i32, dividend: f64, eps: f64) -> FinancialYearRecord {
    FinancialYearRecord {
        book_value_per_share: Some(30.0),
        earnings_per_share: Some(eps),
        dividend_per_share: Some(dividend),
        payout_ratio: Some(65.0),
        debt_to_equity: Some(0.8),
        ..FinancialYearRecord::new(fiscal_year, "USD")
    }
}

fn fixture() -> FixtureProvider {
    FixtureProvider {
        history: FinancialHistory::new(vec![
            year(2018, 0.9, 2.0),
            year(2019, 1.0, 2.2),
            year(2020, 1.1, 2.1),
            year(2021, 1.2, 2.4),
            year(2022, 1.2, 2.6),
            year(2023, 1.3, 2.5),
        ])
        .unwrap(),
        // Newest first, the way most price endpoints list them.
        prices: vec![
            PriceQuote::new(date(14), 52.437),
            PriceQuote::new(date(13), 51.9),
            PriceQuote::new(date(12), 51.2),
        ]
        .into(),
        snapshot: MarketSnapshot {
            pe_ratio: "21.4".into(),
            dividend_yield: "2.48 %".into(),
            company_name: Some("Fixture Holdings".into()),
            sector: None,
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn test_each_provider_queried_once() {
    let evaluator = Evaluator::new(fixture(), EvaluationConfig::default());
    evaluator
        .evaluate_ticker("fxh", 5, Some("Conglomerates"), date(15))
        .await
        .unwrap();

    let provider = evaluator.provider();
    assert_eq!(provider.history_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.price_calls.load(Ordering::SeqCst), 1);
    assert_eq!(provider.snapshot_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_mixed_scorecard() {
    let evaluator = Evaluator::new(fixture(), EvaluationConfig::default());
    let metrics = evaluator
        .evaluate_ticker("fxh", 5, Some("Conglomerates"), date(15))
        .await
        .unwrap();

    assert_eq!(metrics.ticker, "FXH");
    assert_eq!(metrics.industry.as_deref(), Some("Conglomerates"));
    // Flat step from 2021 to 2022.
    assert!(!metrics.continuous_dividend_increases);
    assert_relative_eq!(metrics.price, 52.44);
    assert_eq!(metrics.price_date, date(14));
    // (1.3 / 1.0)^(1/5) - 1
    assert_relative_eq!(metrics.dividend_cagr, 5.39);
    // sqrt(24 * 2.5 * 30) = sqrt(1800)
    assert_relative_eq!(metrics.graham_number, 42.43);
    // Premium measured against the price: -(52.44 - 42.43) / 52.44
    assert_relative_eq!(metrics.discount, -19.09);
    // Only the yield band holds.
    assert_eq!(metrics.rating.score(), 1);
    assert_eq!(metrics.rating.marks(), "★☆☆☆☆☆☆");
}

#[tokio::test]
async fn test_weekend_falls_back_to_first_quote() {
    let evaluator = Evaluator::new(fixture(), EvaluationConfig::default());
    // Reference date is the 16th, a Sunday with no close.
    let metrics = evaluator
        .evaluate_ticker("FXH", 5, None, date(17))
        .await
        .unwrap();
    assert!(metrics.price_substituted);
    assert_eq!(metrics.price_date, date(14));
}

#[tokio::test]
async fn test_idempotent() {
    let evaluator = Evaluator::new(fixture(), EvaluationConfig::default());
    let first = evaluator.evaluate_ticker("FXH", 5, None, date(15)).await.unwrap();
    let second = evaluator.evaluate_ticker("FXH", 5, None, date(15)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.discount.to_bits(), second.discount.to_bits());
    assert_eq!(first.dividend_cagr.to_bits(), second.dividend_cagr.to_bits());
    assert_eq!(first.graham_number.to_bits(), second.graham_number.to_bits());
}

#[tokio::test]
async fn test_provider_failure_is_wrapped() {
    let provider = FixtureProvider {
        fail_prices: true,
        ..fixture()
    };
    let evaluator = Evaluator::new(provider, EvaluationConfig::default());
    let err = evaluator
        .evaluate_ticker("FXH", 5, None, date(15))
        .await
        .unwrap_err();

    assert!(err.is_provider_error());
    assert_eq!(err.ticker, "FXH");
    assert_eq!(err.metric, "fetch");
    assert!(matches!(
        err.kind,
        EvaluationErrorKind::Provider(ProviderError::SymbolNotFound(_))
    ));
}

#[tokio::test]
async fn test_no_partial_results() {
    let mut provider = fixture();
    provider.prices = PriceSeries::default();
    let evaluator = Evaluator::new(provider, EvaluationConfig::default());

    let err = evaluator
        .evaluate_ticker("FXH", 5, None, date(15))
        .await
        .unwrap_err();
    assert_eq!(err.metric, "price");
    assert!(!err.is_provider_error());
}

#[tokio::test]
async fn test_invalid_security() {
    let evaluator = Evaluator::new(fixture(), EvaluationConfig::default());
    let err = evaluator
        .evaluate_ticker("  ", 5, None, date(15))
        .await
        .unwrap_err();
    assert_eq!(err.metric, "security");

    let err = evaluator
        .evaluate_ticker("FXH", 0, None, date(15))
        .await
        .unwrap_err();
    assert_eq!(err.metric, "security");
}

#[tokio::test]
async fn test_relaxed_criteria_raise_score() {
    let config: EvaluationConfig = serde_json::from_str(
        r#"{"criteria": {"max_pe_ratio": 25.0, "max_payout_ratio": 70.0, "max_debt_to_equity": 1.0}}"#,
    )
    .unwrap();
    let evaluator = Evaluator::new(fixture(), config);
    let metrics = evaluator
        .evaluate_ticker("FXH", 5, None, date(15))
        .await
        .unwrap();
    assert_eq!(metrics.rating.score(), 4);
}
