//! Single-ticker evaluation command.

use crate::{OutputFormat, report};
use anyhow::Result;
use chrono::NaiveDate;
use stalwart_eval::EvaluationConfig;

/// Evaluate one ticker and print its scorecard.
pub(crate) async fn run(
    ticker: &str,
    periods: usize,
    industry: Option<&str>,
    as_of: NaiveDate,
    config: EvaluationConfig,
    format: OutputFormat,
) -> Result<()> {
    let evaluator = super::fmp_evaluator(config)?;
    let metrics = evaluator
        .evaluate_ticker(ticker, periods, industry, as_of)
        .await?;

    match format {
        OutputFormat::Text => report::print(&metrics, &evaluator.config().criteria),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
    }

    Ok(())
}
