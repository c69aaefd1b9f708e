//! Evaluation settings from the command line.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use stalwart_eval::EvaluationConfig;
use std::fs;
use std::path::Path;

/// Load the evaluation config, overlaying a JSON file on the defaults.
pub(crate) fn load(path: Option<&Path>) -> Result<EvaluationConfig> {
    let Some(path) = path else {
        return Ok(EvaluationConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Parse and validate a JSON config document.
fn parse(text: &str) -> Result<EvaluationConfig> {
    let config: EvaluationConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Parse a date in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .with_context(|| format!("invalid date format: {date_str}"))
}

/// The evaluation date: `--as-of` when given, else today in local time.
pub(crate) fn evaluation_date(as_of: Option<&str>) -> Result<NaiveDate> {
    as_of.map_or_else(|| Ok(Local::now().date_naive()), parse_date)
}
