//! Single-ticker evaluation.
//!
//! [`evaluate_inputs`] derives every fundamental from data that has already
//! been fetched and rates it. [`Evaluator`] wraps it with the fetch step,
//! querying each provider exactly once per evaluation.

use crate::config::EvaluationConfig;
use crate::rating::{Fundamentals, Rating, RuleOutcome, rate, rule_outcomes};
use serde::Serialize;
use stalwart_metrics::dividend::{continuous_dividend_increase, dividend_cagr};
use stalwart_metrics::price::{latest_price, reference_date};
use stalwart_metrics::snapshot::{dividend_yield, price_to_earnings};
use stalwart_metrics::statement::{debt_to_equity, latest_record, payout_ratio};
use stalwart_metrics::value::{discount_rate, graham_number};
use stalwart_traits::{
    DataProvider, Date, EvaluationError, FinancialHistory, MarketSnapshot, MetricError,
    PriceSeries, ProviderError, RecordField, Security,
};

/// Stage name used when a provider call fails.
pub const FETCH_STAGE: &str = "fetch";

/// Raw data for one ticker, as returned by the providers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationInputs {
    /// Per-year statement records, oldest first.
    pub history: FinancialHistory,
    /// Daily closes in provider order.
    pub prices: PriceSeries,
    /// Current market statistics.
    pub snapshot: MarketSnapshot,
}

/// Every fundamental derived for one ticker, plus its rating.
///
/// Built once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Upper-case ticker.
    pub ticker: String,
    /// Company name, when the snapshot carries one.
    pub company_name: Option<String>,
    /// Industry label supplied by the caller.
    pub industry: Option<String>,
    /// Sector reported by the market data provider.
    pub sector: Option<String>,
    /// Lookback window in fiscal years.
    pub periods: usize,
    /// Reporting currency of the latest fiscal year.
    pub currency: String,
    /// Latest fiscal year in the history.
    pub fiscal_year: i32,
    /// Dividend rose every year of the window.
    pub continuous_dividend_increases: bool,
    /// Latest close, rounded to two decimals.
    pub price: f64,
    /// Date of the close used.
    pub price_date: Date,
    /// Whether the close came from the fallback quote.
    pub price_substituted: bool,
    /// Current dividend yield, percent.
    pub dividend_yield: f64,
    /// Current price to earnings ratio.
    pub price_to_earnings_ratio: f64,
    /// Dividend CAGR over the window, percent.
    pub dividend_cagr: f64,
    /// Latest payout ratio, percent.
    pub dividend_payout_ratio: f64,
    /// Latest debt to equity ratio.
    pub debt_to_equity: f64,
    /// Graham number, rounded to two decimals.
    pub graham_number: f64,
    /// Signed discount to the Graham number, percent.
    pub discount: f64,
    /// Number of rules satisfied.
    pub rating: Rating,
    /// Per-rule outcomes, in rule order.
    pub rules: Vec<RuleOutcome>,
}

impl DerivedMetrics {
    /// The seven values the rating rules look at.
    #[must_use]
    pub const fn fundamentals(&self) -> Fundamentals {
        Fundamentals {
            continuous_dividend_increases: self.continuous_dividend_increases,
            dividend_yield: self.dividend_yield,
            dividend_cagr: self.dividend_cagr,
            price_to_earnings_ratio: self.price_to_earnings_ratio,
            dividend_payout_ratio: self.dividend_payout_ratio,
            debt_to_equity: self.debt_to_equity,
            discount: self.discount,
        }
    }
}

/// Derive and rate every fundamental for `security` from fetched data.
///
/// `as_of` is the evaluation date; the close looked up first is
/// `config.price_lag_days` before it. The result is all or nothing: the
/// first metric that cannot be derived aborts the evaluation.
///
/// # Errors
///
/// Returns an [`EvaluationError`] naming the ticker and the failing metric.
pub fn evaluate_inputs(
    security: &Security,
    inputs: &EvaluationInputs,
    as_of: Date,
    config: &EvaluationConfig,
) -> Result<DerivedMetrics, EvaluationError> {
    let ticker = security.ticker();
    let periods = security.periods();
    let fail = |metric: &'static str| {
        move |err: MetricError| EvaluationError::new(ticker, metric, err)
    };

    config.validate().map_err(fail("config"))?;

    let dividends = inputs
        .history
        .series(RecordField::DividendPerShare, periods)
        .map_err(fail("dividend_history"))?;
    let continuous = continuous_dividend_increase(&dividends, periods)
        .map_err(fail("continuous_dividend_increases"))?;
    let cagr = dividend_cagr(&dividends, periods).map_err(fail("dividend_cagr"))?;
    tracing::debug!(ticker, continuous, cagr, "dividend metrics");

    let price = latest_price(
        &inputs.prices,
        reference_date(as_of, config.price_lag_days),
    )
    .map_err(fail("price"))?;
    let yield_pct = dividend_yield(&inputs.snapshot).map_err(fail("dividend_yield"))?;
    let pe = price_to_earnings(&inputs.snapshot).map_err(fail("price_to_earnings_ratio"))?;
    tracing::debug!(ticker, price = price.close, yield_pct, pe, "market metrics");

    let latest = latest_record(&inputs.history).map_err(fail("latest_record"))?;
    let payout = payout_ratio(latest).map_err(fail("dividend_payout_ratio"))?;
    let leverage = debt_to_equity(latest).map_err(fail("debt_to_equity"))?;
    let eps = latest
        .require(RecordField::EarningsPerShare)
        .map_err(fail("graham_number"))?;
    let bvps = latest
        .require(RecordField::BookValuePerShare)
        .map_err(fail("graham_number"))?;
    let graham = graham_number(eps, bvps, &config.graham).map_err(fail("graham_number"))?;
    let discount = discount_rate(price.close, graham).map_err(fail("discount"))?;
    tracing::debug!(ticker, payout, leverage, graham, discount, "value metrics");

    let fundamentals = Fundamentals {
        continuous_dividend_increases: continuous,
        dividend_yield: yield_pct,
        dividend_cagr: cagr,
        price_to_earnings_ratio: pe,
        dividend_payout_ratio: payout,
        debt_to_equity: leverage,
        discount,
    };
    let rating = rate(&fundamentals, &config.criteria);
    tracing::info!(ticker, score = rating.score(), "evaluated");

    Ok(DerivedMetrics {
        ticker: ticker.to_string(),
        company_name: inputs.snapshot.company_name.clone(),
        industry: security.industry().map(str::to_string),
        sector: inputs.snapshot.sector.clone(),
        periods,
        currency: latest.currency.clone(),
        fiscal_year: latest.fiscal_year,
        continuous_dividend_increases: continuous,
        price: price.close,
        price_date: price.date,
        price_substituted: price.substituted,
        dividend_yield: yield_pct,
        price_to_earnings_ratio: pe,
        dividend_cagr: cagr,
        dividend_payout_ratio: payout,
        debt_to_equity: leverage,
        graham_number: graham,
        discount,
        rating,
        rules: rule_outcomes(&fundamentals, &config.criteria),
    })
}

/// Fetches data for a ticker and evaluates it.
///
/// Generic over the data source so tests can run against in-memory fixtures.
#[derive(Debug, Clone)]
pub struct Evaluator<P> {
    provider: P,
    config: EvaluationConfig,
}

impl<P: DataProvider> Evaluator<P> {
    /// Create an evaluator over a data source.
    pub const fn new(provider: P, config: EvaluationConfig) -> Self {
        Self { provider, config }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// The underlying data source.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch the three inputs concurrently, each exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first provider failure, in history, price, snapshot order.
    pub async fn fetch(&self, security: &Security) -> Result<EvaluationInputs, EvaluationError> {
        let ticker = security.ticker();
        let (history, prices, snapshot) = tokio::join!(
            self.provider
                .fetch_financial_history(ticker, security.periods()),
            self.provider.fetch_price_series(ticker),
            self.provider.fetch_market_snapshot(ticker),
        );
        let wrap = |err: ProviderError| EvaluationError::new(ticker, FETCH_STAGE, err);

        Ok(EvaluationInputs {
            history: history.map_err(wrap)?,
            prices: prices.map_err(wrap)?,
            snapshot: snapshot.map_err(wrap)?,
        })
    }

    /// Fetch and evaluate one security.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] for provider failures (stage
    /// [`FETCH_STAGE`]) and for any metric that cannot be derived.
    #[tracing::instrument(skip_all, fields(ticker = %security.ticker()))]
    pub async fn evaluate(
        &self,
        security: &Security,
        as_of: Date,
    ) -> Result<DerivedMetrics, EvaluationError> {
        let inputs = self.fetch(security).await?;
        evaluate_inputs(security, &inputs, as_of, &self.config)
    }

    /// Build a [`Security`] from raw arguments and evaluate it.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] with metric `"security"` for a blank
    /// ticker or zero periods, and otherwise as [`Self::evaluate`].
    pub async fn evaluate_ticker(
        &self,
        ticker: &str,
        periods: usize,
        industry: Option<&str>,
        as_of: Date,
    ) -> Result<DerivedMetrics, EvaluationError> {
        let mut security = Security::new(ticker, periods)
            .map_err(|err| EvaluationError::new(ticker.trim(), "security", err))?;
        if let Some(industry) = industry {
            security = security.with_industry(industry);
        }
        self.evaluate(&security, as_of).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stalwart_traits::{EvaluationErrorKind, FinancialYearRecord, PriceQuote};

    fn d(month: u32, day: u32) -> Date {
        Date::from_ymd_opt(2024, month, day).unwrap()
    }

    fn record(year: i32, dividend: f64) -> FinancialYearRecord {
        FinancialYearRecord {
            book_value_per_share: Some(24.0),
            earnings_per_share: Some(4.0),
            dividend_per_share: Some(dividend),
            payout_ratio: Some(45.0),
            debt_to_equity: Some(0.4),
            ..FinancialYearRecord::new(year, "USD")
        }
    }

    fn create_test_inputs() -> EvaluationInputs {
        EvaluationInputs {
            history: FinancialHistory::new(vec![
                record(2019, 1.0),
                record(2020, 1.1),
                record(2021, 1.2),
                record(2022, 1.3),
                record(2023, 1.4),
            ])
            .unwrap(),
            prices: vec![
                PriceQuote::new(d(3, 8), 40.0),
                PriceQuote::new(d(3, 7), 39.5),
            ]
            .into(),
            snapshot: MarketSnapshot {
                pe_ratio: "10.0".into(),
                dividend_yield: "3.50 %".into(),
                company_name: Some("Example Corp".into()),
                sector: Some("Industrials".into()),
            },
        }
    }

    fn security() -> Security {
        Security::new("exm", 5).unwrap()
    }

    #[test]
    fn test_full_evaluation() {
        let metrics = evaluate_inputs(
            &security(),
            &create_test_inputs(),
            d(3, 9),
            &EvaluationConfig::default(),
        )
        .unwrap();

        assert_eq!(metrics.ticker, "EXM");
        assert!(metrics.continuous_dividend_increases);
        assert_relative_eq!(metrics.price, 40.0);
        assert_eq!(metrics.price_date, d(3, 8));
        assert!(!metrics.price_substituted);
        assert_relative_eq!(metrics.dividend_yield, 3.5);
        assert_relative_eq!(metrics.price_to_earnings_ratio, 10.0);
        // (1.4 / 1.0)^(1/5) - 1 = 6.96%
        assert_relative_eq!(metrics.dividend_cagr, 6.96);
        assert_relative_eq!(metrics.graham_number, 48.0);
        assert_relative_eq!(metrics.discount, 16.67);
        assert_eq!(metrics.rating.score(), 7);
        assert_eq!(metrics.currency, "USD");
        assert_eq!(metrics.fiscal_year, 2023);
        assert_eq!(metrics.sector.as_deref(), Some("Industrials"));
    }

    #[test]
    fn test_price_lag_is_configurable() {
        let config = EvaluationConfig {
            price_lag_days: 2,
            ..Default::default()
        };
        let metrics = evaluate_inputs(&security(), &create_test_inputs(), d(3, 9), &config).unwrap();
        assert_eq!(metrics.price_date, d(3, 7));
        assert_relative_eq!(metrics.price, 39.5);
    }

    #[test]
    fn test_failing_metric_is_named() {
        let mut inputs = create_test_inputs();
        inputs.snapshot.pe_ratio = "n/a".into();

        let err = evaluate_inputs(&security(), &inputs, d(3, 9), &EvaluationConfig::default())
            .unwrap_err();
        assert_eq!(err.ticker, "EXM");
        assert_eq!(err.metric, "price_to_earnings_ratio");
        assert!(!err.is_provider_error());
    }

    #[test]
    fn test_short_history() {
        let err = evaluate_inputs(
            &Security::new("EXM", 6).unwrap(),
            &create_test_inputs(),
            d(3, 9),
            &EvaluationConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.kind,
            EvaluationErrorKind::Metric(MetricError::InsufficientHistory {
                required: 6,
                available: 5
            })
        ));
    }

    #[test]
    fn test_negative_earnings_surface_domain_error() {
        let mut inputs = create_test_inputs();
        let mut records = inputs.history.records().to_vec();
        if let Some(last) = records.last_mut() {
            last.earnings_per_share = Some(-2.0);
        }
        inputs.history = FinancialHistory::new(records).unwrap();

        let err = evaluate_inputs(&security(), &inputs, d(3, 9), &EvaluationConfig::default())
            .unwrap_err();
        assert_eq!(err.metric, "graham_number");
        assert!(matches!(
            err.kind,
            EvaluationErrorKind::Metric(MetricError::Domain(_))
        ));
    }

    #[test]
    fn test_fundamentals_roundtrip_rating() {
        let config = EvaluationConfig::default();
        let metrics =
            evaluate_inputs(&security(), &create_test_inputs(), d(3, 9), &config).unwrap();
        assert_eq!(rate(&metrics.fundamentals(), &config.criteria), metrics.rating);
    }
}
