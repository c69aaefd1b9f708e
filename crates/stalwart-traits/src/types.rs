//! Common types used throughout the stalwart screener.
//!
//! This module defines the security under evaluation and the raw inputs the
//! metric engine consumes: per-year financial records, daily price quotes and
//! the current market snapshot.

use crate::{MetricError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier, always upper-case.
pub type Symbol = String;

/// Default lookback window, in fiscal years.
pub const DEFAULT_PERIODS: usize = 5;

/// The equity being evaluated.
///
/// A `Security` is built once per evaluation and carries the lookback window
/// applied to every history-based metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Security {
    ticker: Symbol,
    industry: Option<String>,
    periods: usize,
}

impl Security {
    /// Create a security with the given ticker and lookback window.
    ///
    /// The ticker is trimmed and upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError::InvalidInput`] if the ticker is blank or
    /// `periods` is zero.
    pub fn new(ticker: &str, periods: usize) -> Result<Self> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(MetricError::InvalidInput("ticker must not be empty".into()));
        }
        if periods == 0 {
            return Err(MetricError::InvalidInput(
                "periods must be a positive integer".into(),
            ));
        }
        Ok(Self {
            ticker,
            industry: None,
            periods,
        })
    }

    /// Annotate the security with an industry or sector label.
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// The upper-case ticker symbol.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// The industry or sector label, if any.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    /// Lookback window in fiscal years.
    pub const fn periods(&self) -> usize {
        self.periods
    }
}

/// Named per-year fields of a [`FinancialYearRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// Book value per share.
    BookValuePerShare,
    /// Earnings per share.
    EarningsPerShare,
    /// Dividend per share.
    DividendPerShare,
    /// Payout ratio, in percent.
    PayoutRatio,
    /// Debt to equity ratio.
    DebtToEquity,
}

impl RecordField {
    /// Field name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookValuePerShare => "book_value_per_share",
            Self::EarningsPerShare => "earnings_per_share",
            Self::DividendPerShare => "dividend_per_share",
            Self::PayoutRatio => "payout_ratio",
            Self::DebtToEquity => "debt_to_equity",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fiscal year of per-share financials for a security.
///
/// Every numeric field is optional: providers leave a field empty when the
/// upstream value is missing or not a number, and any metric that needs it
/// fails with [`MetricError::MissingField`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialYearRecord {
    /// Fiscal year the values belong to.
    pub fiscal_year: i32,
    /// Reporting currency (ISO code).
    pub currency: String,
    /// Book value per share.
    pub book_value_per_share: Option<f64>,
    /// Earnings per share.
    pub earnings_per_share: Option<f64>,
    /// Dividend per share.
    pub dividend_per_share: Option<f64>,
    /// Dividends as a percentage of earnings.
    pub payout_ratio: Option<f64>,
    /// Debt to equity ratio.
    pub debt_to_equity: Option<f64>,
}

impl FinancialYearRecord {
    /// Create an empty record for the given year and currency.
    pub fn new(fiscal_year: i32, currency: impl Into<String>) -> Self {
        Self {
            fiscal_year,
            currency: currency.into(),
            book_value_per_share: None,
            earnings_per_share: None,
            dividend_per_share: None,
            payout_ratio: None,
            debt_to_equity: None,
        }
    }

    /// Raw value of a field, if present.
    pub const fn get(&self, field: RecordField) -> Option<f64> {
        match field {
            RecordField::BookValuePerShare => self.book_value_per_share,
            RecordField::EarningsPerShare => self.earnings_per_share,
            RecordField::DividendPerShare => self.dividend_per_share,
            RecordField::PayoutRatio => self.payout_ratio,
            RecordField::DebtToEquity => self.debt_to_equity,
        }
    }

    /// Value of a field, required to be present and finite.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError::MissingField`] when the value is absent, NaN or
    /// infinite.
    pub fn require(&self, field: RecordField) -> Result<f64> {
        self.get(field)
            .filter(|v| v.is_finite())
            .ok_or(MetricError::MissingField {
                fiscal_year: self.fiscal_year,
                field: field.as_str(),
            })
    }
}

/// Per-year financial records, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialHistory {
    records: Vec<FinancialYearRecord>,
}

impl FinancialHistory {
    /// Build a history from records ordered oldest to newest.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError::NonContiguousHistory`] if fiscal years are not
    /// strictly increasing.
    pub fn new(records: Vec<FinancialYearRecord>) -> Result<Self> {
        if let Some(pair) = records
            .windows(2)
            .find(|pair| pair[1].fiscal_year <= pair[0].fiscal_year)
        {
            return Err(MetricError::NonContiguousHistory {
                previous: pair[0].fiscal_year,
                next: pair[1].fiscal_year,
            });
        }
        Ok(Self { records })
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[FinancialYearRecord] {
        &self.records
    }

    /// Number of fiscal years available.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent fiscal year.
    pub fn latest(&self) -> Option<&FinancialYearRecord> {
        self.records.last()
    }

    /// Reporting currency of the most recent fiscal year.
    pub fn currency(&self) -> Option<&str> {
        self.latest().map(|r| r.currency.as_str())
    }

    /// The most recent `periods` fiscal years, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError::InsufficientHistory`] when fewer than `periods`
    /// records exist (or `periods` is zero), and
    /// [`MetricError::NonContiguousHistory`] when the window skips a year.
    pub fn window(&self, periods: usize) -> Result<&[FinancialYearRecord]> {
        if periods == 0 || self.records.len() < periods {
            return Err(MetricError::InsufficientHistory {
                required: periods,
                available: self.records.len(),
            });
        }
        let window = &self.records[self.records.len() - periods..];
        if let Some(pair) = window
            .windows(2)
            .find(|pair| pair[1].fiscal_year != pair[0].fiscal_year + 1)
        {
            return Err(MetricError::NonContiguousHistory {
                previous: pair[0].fiscal_year,
                next: pair[1].fiscal_year,
            });
        }
        Ok(window)
    }

    /// Values of one field across the most recent `periods` years, oldest first.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::window`] errors and returns
    /// [`MetricError::MissingField`] for the first year lacking the field.
    pub fn series(&self, field: RecordField, periods: usize) -> Result<Vec<f64>> {
        self.window(periods)?
            .iter()
            .map(|record| record.require(field))
            .collect()
    }
}

/// A daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Trading date.
    pub date: Date,
    /// Closing price.
    pub close: f64,
}

impl PriceQuote {
    /// Create a quote.
    pub const fn new(date: Date, close: f64) -> Self {
        Self { date, close }
    }
}

/// Daily closes in the order the provider returned them.
///
/// The order is never changed: several providers return newest first, and
/// the latest-price fallback relies on that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    quotes: Vec<PriceQuote>,
}

impl PriceSeries {
    /// Wrap quotes in provider order.
    pub const fn new(quotes: Vec<PriceQuote>) -> Self {
        Self { quotes }
    }

    /// Quote for an exact date.
    pub fn get(&self, date: Date) -> Option<&PriceQuote> {
        self.quotes.iter().find(|q| q.date == date)
    }

    /// First quote in provider order.
    pub fn first(&self) -> Option<&PriceQuote> {
        self.quotes.first()
    }

    /// Number of quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the series holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Iterate quotes in provider order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceQuote> {
        self.quotes.iter()
    }
}

impl From<Vec<PriceQuote>> for PriceSeries {
    fn from(quotes: Vec<PriceQuote>) -> Self {
        Self::new(quotes)
    }
}

impl FromIterator<PriceQuote> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceQuote>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Current market statistics for a security.
///
/// Fields are kept as the provider formatted them; the metric engine parses
/// the numbers out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Price to earnings ratio, e.g. `"14.2"`.
    pub pe_ratio: String,
    /// Current dividend yield as free text, e.g. `"3.12 %"`.
    pub dividend_yield: String,
    /// Company name, when the provider reports one.
    pub company_name: Option<String>,
    /// Sector, when the provider reports one.
    pub sector: Option<String>,
}
