//! Point-in-time ratios from the most recent fiscal year.

use stalwart_traits::{FinancialHistory, FinancialYearRecord, MetricError, RecordField, Result};

/// The most recent fiscal year of the history.
///
/// # Errors
///
/// Returns [`MetricError::InsufficientHistory`] if the history is empty.
pub fn latest_record(history: &FinancialHistory) -> Result<&FinancialYearRecord> {
    history.latest().ok_or(MetricError::InsufficientHistory {
        required: 1,
        available: 0,
    })
}

/// Dividend payout ratio in percent, as reported for the year.
///
/// # Errors
///
/// Returns [`MetricError::MissingField`] if the year has no payout ratio.
pub fn payout_ratio(latest: &FinancialYearRecord) -> Result<f64> {
    latest.require(RecordField::PayoutRatio)
}

/// Debt to equity ratio, as reported for the year.
///
/// # Errors
///
/// Returns [`MetricError::MissingField`] if the year has no debt/equity value.
pub fn debt_to_equity(latest: &FinancialYearRecord) -> Result<f64> {
    latest.require(RecordField::DebtToEquity)
}
