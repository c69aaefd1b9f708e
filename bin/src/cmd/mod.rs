//! CLI subcommand modules.
//!
//! This module contains the implementations for all stalwart CLI subcommands.

pub(crate) mod evaluate;
pub(crate) mod metrics;
pub(crate) mod screen;

use anyhow::{Context, Result};
use stalwart_eval::{EvaluationConfig, Evaluator};
use stalwart_fmp::FmpClient;

/// Evaluator backed by Financial Modeling Prep.
pub(crate) fn fmp_evaluator(config: EvaluationConfig) -> Result<Evaluator<FmpClient>> {
    let client = FmpClient::from_env()
        .context("an FMP API key is required (set FMP_API_KEY or add it to .env)")?;
    Ok(Evaluator::new(client, config))
}
