//! Watch-list screening command.

use crate::{OutputFormat, report};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use stalwart_eval::{DerivedMetrics, EvaluationConfig, Rating};
use std::fs;
use std::path::Path;

/// Minimum number of satisfied rules for a ticker to be reported.
pub(crate) const DEFAULT_MIN_SCORE: u8 = 5;

/// Whether a rating counts enough satisfied rules to be reported.
const fn passes(rating: Rating, min_score: u8) -> bool {
    rating.score() >= min_score
}

/// Tickers listed in a watch-list file.
///
/// Tickers are separated by whitespace, any number per line. Everything after
/// a `#` on a line is ignored. Repeated tickers are dropped, keeping the first.
pub(crate) fn parse_watch_list(text: &str) -> Vec<String> {
    let mut tickers: Vec<String> = Vec::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or_default();
        for ticker in line.split_whitespace() {
            let ticker = ticker.to_uppercase();
            if !tickers.contains(&ticker) {
                tickers.push(ticker);
            }
        }
    }
    tickers
}

/// Evaluate every ticker in `file`, reporting those scoring at least `min_score`.
///
/// Tickers that fail to evaluate are logged and skipped.
pub(crate) async fn run(
    file: &Path,
    periods: usize,
    min_score: u8,
    as_of: NaiveDate,
    config: EvaluationConfig,
    format: OutputFormat,
) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read watch list {}", file.display()))?;
    let tickers = parse_watch_list(&text);
    if tickers.is_empty() {
        anyhow::bail!("watch list {} contains no tickers", file.display());
    }

    let evaluator = super::fmp_evaluator(config)?;
    let criteria = &evaluator.config().criteria;
    let mut passing: Vec<DerivedMetrics> = Vec::new();
    let mut failed = 0usize;

    for ticker in &tickers {
        match evaluator.evaluate_ticker(ticker, periods, None, as_of).await {
            Ok(metrics) if passes(metrics.rating, min_score) => {
                if format == OutputFormat::Text {
                    report::print(&metrics, criteria);
                    println!();
                }
                passing.push(metrics);
            }
            Ok(metrics) => {
                tracing::info!(ticker = %metrics.ticker, score = metrics.rating.score(), "below minimum score");
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(error = %e, "skipping ticker");
            }
        }
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&passing)?);
    }

    tracing::info!(
        screened = tickers.len(),
        passed = passing.len(),
        failed,
        min_score,
        "screen complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watch_list() {
        let text = "jnj ko  pep\n# consumer staples\nPG # procter\n\n  mmm\nKO\n";
        assert_eq!(parse_watch_list(text), vec!["JNJ", "KO", "PEP", "PG", "MMM"]);
    }

    #[test]
    fn test_empty_watch_list() {
        assert!(parse_watch_list("# nothing here\n\n").is_empty());
    }

    #[test]
    fn test_min_score_filters_on_satisfied_rules() {
        assert!(!passes(Rating::from_score(4), DEFAULT_MIN_SCORE));
        assert!(passes(Rating::from_score(5), DEFAULT_MIN_SCORE));
        assert!(passes(Rating::from_score(7), DEFAULT_MIN_SCORE));
        assert!(passes(Rating::from_score(0), 0));
    }
}
