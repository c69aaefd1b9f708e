//! Data types for FMP API responses.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

/// Fiscal year as FMP sends it: a number on some endpoints, a string on others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FiscalYear {
    /// Numeric year.
    Number(i32),
    /// Year as text, e.g. `"2023"`.
    Text(String),
}

impl FiscalYear {
    /// The year as an integer, if it parses.
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Number(year) => Some(*year),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Annual financial ratios from FMP.
///
/// Only the per-share and ratio fields the screener needs are kept. Numeric
/// fields are optional: FMP omits or nulls them for some filings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Ticker symbol.
    pub symbol: String,
    /// Period end date.
    pub date: String,
    /// Fiscal year.
    #[serde(default)]
    pub fiscal_year: Option<FiscalYear>,
    /// Reporting currency.
    #[serde(default)]
    pub reported_currency: Option<String>,
    /// Book value per share.
    #[serde(default)]
    pub book_value_per_share: Option<f64>,
    /// Net income per share.
    #[serde(default)]
    pub net_income_per_share: Option<f64>,
    /// Dividend per share.
    #[serde(default)]
    pub dividend_per_share: Option<f64>,
    /// Dividends over net income, as a fraction.
    #[serde(default)]
    pub dividend_payout_ratio: Option<f64>,
    /// Debt to equity ratio.
    #[serde(default)]
    pub debt_to_equity_ratio: Option<f64>,
}

impl FinancialRatios {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Fiscal year, falling back to the year of the period end date.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.fiscal_year
            .as_ref()
            .and_then(FiscalYear::value)
            .or_else(|| self.parsed_date().map(|d| d.year()))
    }
}

/// Trailing twelve month ratios from FMP.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatiosTtm {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Trailing price to earnings ratio.
    #[serde(rename = "priceToEarningsRatioTTM", default)]
    pub price_to_earnings_ratio: Option<f64>,
    /// Trailing dividend yield, as a fraction.
    #[serde(rename = "dividendYieldTTM", default)]
    pub dividend_yield: Option<f64>,
}

/// Company profile from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Current price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Last annual dividend per share.
    #[serde(default)]
    pub last_dividend: Option<f64>,
    /// Sector.
    #[serde(default)]
    pub sector: Option<String>,
    /// Industry, used when the sector is missing.
    #[serde(default)]
    pub industry: Option<String>,
}

impl Profile {
    /// Dividend yield implied by the last dividend and current price, as a fraction.
    #[must_use]
    pub fn implied_dividend_yield(&self) -> Option<f64> {
        match (self.last_dividend, self.price) {
            (Some(dividend), Some(price)) if price > 0.0 => Some(dividend / price),
            _ => None,
        }
    }
}

/// Historical end-of-day price from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPrice {
    /// Date.
    pub date: String,
    /// Open price.
    #[serde(default)]
    pub open: Option<f64>,
    /// High price.
    #[serde(default)]
    pub high: Option<f64>,
    /// Low price.
    #[serde(default)]
    pub low: Option<f64>,
    /// Close price.
    pub close: f64,
    /// Volume.
    #[serde(default)]
    pub volume: Option<f64>,
}

impl HistoricalPrice {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
