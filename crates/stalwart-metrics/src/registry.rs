//! Metric registry for discovering and categorizing derived fundamentals.
//!
//! This module provides metadata about every metric the engine derives, used
//! by the CLI listing and by report rendering.

use serde::{Deserialize, Serialize};

/// Metric category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    /// Dividend track record
    Dividend,
    /// Price relative to earnings and intrinsic value
    Valuation,
    /// Balance sheet and payout strength
    Safety,
    /// Market quotes
    Market,
}

impl MetricCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Dividend => "Dividend continuity and growth over the lookback window",
            Self::Valuation => "Price compared to earnings and to the Graham number",
            Self::Safety => "Payout and leverage from the latest fiscal year",
            Self::Market => "Current price and yield from market data",
        }
    }
}

/// Metadata about a metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricInfo {
    /// Unique identifier for the metric
    pub name: &'static str,

    /// Category classification
    pub category: MetricCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Display unit ("%", "$", "x" or empty)
    pub unit: &'static str,

    /// Whether the metric needs the full lookback window of annual data
    pub requires_history: bool,
}

/// Get information about all derived metrics.
#[must_use]
pub fn available_metrics() -> Vec<MetricInfo> {
    vec![
        // Dividend metrics
        MetricInfo {
            name: "continuous_dividend_increases",
            category: MetricCategory::Dividend,
            description: "Dividend per share rose in every year of the window",
            unit: "",
            requires_history: true,
        },
        MetricInfo {
            name: "dividend_cagr",
            category: MetricCategory::Dividend,
            description: "Compound annual growth of dividend per share",
            unit: "%",
            requires_history: true,
        },
        // Market metrics
        MetricInfo {
            name: "price",
            category: MetricCategory::Market,
            description: "Latest settled daily close",
            unit: "$",
            requires_history: false,
        },
        MetricInfo {
            name: "dividend_yield",
            category: MetricCategory::Market,
            description: "Current dividend yield",
            unit: "%",
            requires_history: false,
        },
        // Valuation metrics
        MetricInfo {
            name: "price_to_earnings_ratio",
            category: MetricCategory::Valuation,
            description: "Current price to earnings ratio",
            unit: "x",
            requires_history: false,
        },
        MetricInfo {
            name: "graham_number",
            category: MetricCategory::Valuation,
            description: "sqrt(k x EPS x book value per share) for the latest year",
            unit: "$",
            requires_history: false,
        },
        MetricInfo {
            name: "discount",
            category: MetricCategory::Valuation,
            description: "Signed discount of price to the Graham number",
            unit: "%",
            requires_history: false,
        },
        // Safety metrics
        MetricInfo {
            name: "dividend_payout_ratio",
            category: MetricCategory::Safety,
            description: "Dividends as a share of earnings, latest year",
            unit: "%",
            requires_history: false,
        },
        MetricInfo {
            name: "debt_to_equity",
            category: MetricCategory::Safety,
            description: "Debt relative to shareholder equity, latest year",
            unit: "x",
            requires_history: false,
        },
    ]
}

/// Get all metrics in a specific category.
#[must_use]
pub fn metrics_by_category(category: &MetricCategory) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific metric by name.
#[must_use]
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    available_metrics()
        .into_iter()
        .find(|info| info.name == name)
}

/// Get all metric categories, in listing order.
#[must_use]
pub fn available_categories() -> Vec<MetricCategory> {
    let mut categories: Vec<MetricCategory> = Vec::new();
    for info in available_metrics() {
        if !categories.contains(&info.category) {
            categories.push(info.category);
        }
    }
    categories
}
