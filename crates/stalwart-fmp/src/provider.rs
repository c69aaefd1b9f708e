//! Provider trait implementations over [`FmpClient`].
//!
//! FMP lists ratios and prices newest first and reports ratios as fractions.
//! The conversions here reorder statements oldest first, scale the payout
//! ratio and yields to percent, and keep the price series in FMP's order.

use crate::{FmpClient, FmpError, FinancialRatios, HistoricalPrice, Period, Profile, RatiosTtm};
use stalwart_traits::{
    FinancialHistory, FinancialHistoryProvider, FinancialYearRecord, MarketSnapshot,
    MarketStatisticsProvider, PriceQuote, PriceSeries, PriceSeriesProvider, ProviderError,
    ProviderResult,
};

/// Convert FMP annual ratios into a financial history, oldest first.
///
/// Rows without a usable fiscal year are skipped.
///
/// # Errors
///
/// Returns [`ProviderError::Decode`] if two rows share a fiscal year.
pub fn history_from_ratios(ratios: Vec<FinancialRatios>) -> ProviderResult<FinancialHistory> {
    let mut records: Vec<FinancialYearRecord> = ratios
        .into_iter()
        .filter_map(|row| {
            let Some(year) = row.year() else {
                tracing::warn!(symbol = %row.symbol, date = %row.date, "ratios row without fiscal year, skipping");
                return None;
            };
            Some(FinancialYearRecord {
                book_value_per_share: row.book_value_per_share,
                earnings_per_share: row.net_income_per_share,
                dividend_per_share: row.dividend_per_share,
                payout_ratio: row.dividend_payout_ratio.map(|r| r * 100.0),
                debt_to_equity: row.debt_to_equity_ratio,
                ..FinancialYearRecord::new(year, row.reported_currency.unwrap_or_default())
            })
        })
        .collect();
    records.sort_by_key(|record| record.fiscal_year);

    FinancialHistory::new(records).map_err(|e| ProviderError::Decode(e.to_string()))
}

/// Convert FMP end-of-day prices into a price series, keeping FMP's order.
///
/// Rows with an unparsable date are skipped.
pub fn series_from_prices(prices: Vec<HistoricalPrice>) -> PriceSeries {
    prices
        .into_iter()
        .filter_map(|row| match row.parsed_date() {
            Some(date) => Some(PriceQuote::new(date, row.close)),
            None => {
                tracing::debug!(date = %row.date, "unparsable price date, skipping");
                None
            }
        })
        .collect()
}

/// Render a fractional yield as percent text at full precision.
///
/// Whole numbers keep a trailing `.0`: the yield parser only accepts numbers
/// with a decimal point.
fn percent_text(fraction: f64) -> String {
    let percent = fraction * 100.0;
    if percent.fract() == 0.0 {
        format!("{percent:.1} %")
    } else {
        format!("{percent} %")
    }
}

/// Build a market snapshot from trailing ratios and the company profile.
///
/// Numbers are written at full precision so the rating thresholds see the
/// provider's values. The dividend yield falls back to the profile's last
/// dividend over price when the trailing figure is missing, and the sector
/// falls back to the industry. Missing numbers become empty text and fail
/// later, when the metric is parsed.
pub fn snapshot_from(ttm: &RatiosTtm, profile: Profile) -> MarketSnapshot {
    let pe_ratio = ttm
        .price_to_earnings_ratio
        .map(|pe| pe.to_string())
        .unwrap_or_default();
    let dividend_yield = ttm
        .dividend_yield
        .or_else(|| profile.implied_dividend_yield())
        .map(percent_text)
        .unwrap_or_default();

    MarketSnapshot {
        pe_ratio,
        dividend_yield,
        company_name: profile.company_name,
        sector: profile.sector.or(profile.industry),
    }
}

impl FinancialHistoryProvider for FmpClient {
    async fn fetch_financial_history(
        &self,
        ticker: &str,
        periods: usize,
    ) -> ProviderResult<FinancialHistory> {
        let limit = u32::try_from(periods).unwrap_or(u32::MAX);
        let ratios = self.ratios(ticker, Period::Annual, Some(limit)).await?;
        if ratios.is_empty() {
            return Err(FmpError::NoData(format!("{ticker} annual ratios")).into());
        }
        history_from_ratios(ratios)
    }
}

impl PriceSeriesProvider for FmpClient {
    async fn fetch_price_series(&self, ticker: &str) -> ProviderResult<PriceSeries> {
        let prices = self.historical_prices(ticker, None, None).await?;
        Ok(series_from_prices(prices))
    }
}

impl MarketStatisticsProvider for FmpClient {
    async fn fetch_market_snapshot(&self, ticker: &str) -> ProviderResult<MarketSnapshot> {
        let (ttm, profile) = tokio::join!(self.ratios_ttm(ticker), self.profile(ticker));
        Ok(snapshot_from(&ttm?, profile?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stalwart_eval::RatingCriteria;
    use stalwart_metrics::snapshot::{dividend_yield, price_to_earnings};
    use stalwart_traits::RecordField;

    fn ratios_json() -> Vec<FinancialRatios> {
        serde_json::from_str(
            r#"[
                {"symbol": "JNJ", "date": "2023-12-31", "fiscalYear": "2023", "reportedCurrency": "USD",
                 "bookValuePerShare": 28.5, "netIncomePerShare": 13.88, "dividendPerShare": 4.7,
                 "dividendPayoutRatio": 0.3387, "debtToEquityRatio": 0.43},
                {"symbol": "JNJ", "date": "2022-12-31", "fiscalYear": "2022", "reportedCurrency": "USD",
                 "bookValuePerShare": 29.9, "netIncomePerShare": 6.73, "dividendPerShare": 4.45,
                 "dividendPayoutRatio": 0.6609, "debtToEquityRatio": 0.52},
                {"symbol": "JNJ", "date": "2021-12-31", "fiscalYear": "2021", "reportedCurrency": "USD",
                 "bookValuePerShare": 28.3, "netIncomePerShare": 7.93, "dividendPerShare": 4.19,
                 "dividendPayoutRatio": 0.5283, "debtToEquityRatio": 0.45}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_history_is_reordered_oldest_first() {
        let history = history_from_ratios(ratios_json()).unwrap();
        let years: Vec<i32> = history.records().iter().map(|r| r.fiscal_year).collect();
        assert_eq!(years, vec![2021, 2022, 2023]);

        let dividends = history.series(RecordField::DividendPerShare, 3).unwrap();
        assert_eq!(dividends, vec![4.19, 4.45, 4.7]);
        assert_eq!(history.currency(), Some("USD"));
    }

    #[test]
    fn test_payout_ratio_scaled_to_percent() {
        let history = history_from_ratios(ratios_json()).unwrap();
        let latest = history.latest().unwrap();
        assert_relative_eq!(latest.payout_ratio.unwrap(), 33.87, epsilon = 1e-9);
        assert_relative_eq!(latest.debt_to_equity.unwrap(), 0.43);
        assert_relative_eq!(latest.earnings_per_share.unwrap(), 13.88);
    }

    #[test]
    fn test_duplicate_years_rejected() {
        let mut ratios = ratios_json();
        ratios.push(ratios[0].clone());
        assert!(matches!(
            history_from_ratios(ratios),
            Err(ProviderError::Decode(_))
        ));
    }

    #[test]
    fn test_price_order_preserved() {
        let prices: Vec<HistoricalPrice> = serde_json::from_str(
            r#"[
                {"date": "2024-06-14", "close": 146.2},
                {"date": "bad", "close": 1.0},
                {"date": "2024-06-13", "close": 147.0},
                {"date": "2024-06-12", "close": 146.9}
            ]"#,
        )
        .unwrap();
        let series = series_from_prices(prices);
        assert_eq!(series.len(), 3);
        let first = series.first().unwrap();
        assert_eq!(first.date.to_string(), "2024-06-14");
        assert_relative_eq!(first.close, 146.2);
    }

    #[test]
    fn test_snapshot_text_fields() {
        let ttm = RatiosTtm {
            price_to_earnings_ratio: Some(10.456),
            dividend_yield: Some(0.0312),
            ..Default::default()
        };
        let profile: Profile = serde_json::from_str(
            r#"{"symbol": "JNJ", "companyName": "Johnson & Johnson", "sector": "Healthcare"}"#,
        )
        .unwrap();

        let snapshot = snapshot_from(&ttm, profile);
        assert_eq!(snapshot.pe_ratio, "10.456");
        assert_eq!(snapshot.dividend_yield, format!("{} %", 0.0312 * 100.0));
        assert_eq!(snapshot.company_name.as_deref(), Some("Johnson & Johnson"));
        assert_eq!(snapshot.sector.as_deref(), Some("Healthcare"));
    }

    #[test]
    fn test_snapshot_yield_fallback_and_missing_pe() {
        let profile: Profile = serde_json::from_str(
            r#"{"symbol": "JNJ", "price": 150.0, "lastDividend": 4.8}"#,
        )
        .unwrap();
        let snapshot = snapshot_from(&RatiosTtm::default(), profile);
        assert_eq!(snapshot.dividend_yield, "3.2 %");
        assert!(snapshot.pe_ratio.is_empty());
    }

    #[test]
    fn test_snapshot_keeps_values_just_over_thresholds() {
        let ttm = RatiosTtm {
            price_to_earnings_ratio: Some(16.004),
            dividend_yield: Some(0.08004),
            ..Default::default()
        };
        let profile: Profile = serde_json::from_str(r#"{"symbol": "XYZ"}"#).unwrap();
        let snapshot = snapshot_from(&ttm, profile);

        let pe = price_to_earnings(&snapshot).unwrap();
        let yield_pct = dividend_yield(&snapshot).unwrap();
        assert_relative_eq!(pe, 16.004);
        assert_relative_eq!(yield_pct, 8.004, epsilon = 1e-9);

        let criteria = RatingCriteria::default();
        assert!(pe > criteria.max_pe_ratio);
        assert!(yield_pct > criteria.max_dividend_yield);
    }

    #[test]
    fn test_snapshot_whole_yield_keeps_decimal_point() {
        let ttm = RatiosTtm {
            dividend_yield: Some(0.03),
            ..Default::default()
        };
        let profile: Profile = serde_json::from_str(r#"{"symbol": "XYZ"}"#).unwrap();
        let snapshot = snapshot_from(&ttm, profile);
        assert_eq!(snapshot.dividend_yield, "3.0 %");
        assert_relative_eq!(dividend_yield(&snapshot).unwrap(), 3.0);
    }

    #[test]
    fn test_snapshot_sector_falls_back_to_industry() {
        let profile: Profile = serde_json::from_str(
            r#"{"symbol": "XYZ", "industry": "Drug Manufacturers - General"}"#,
        )
        .unwrap();
        let snapshot = snapshot_from(&RatiosTtm::default(), profile);
        assert_eq!(snapshot.sector.as_deref(), Some("Drug Manufacturers - General"));
    }
}
