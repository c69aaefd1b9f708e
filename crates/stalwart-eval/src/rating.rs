//! Seven-rule defensive rating.
//!
//! Each rule is an independent threshold check on one fundamental. The rating
//! is the number of rules satisfied, rendered as filled marks followed by
//! empty marks. Only the count is rendered: two securities passing different
//! rules but the same number of them display identically.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use stalwart_traits::{MetricError, Result};
use std::fmt;

/// Number of rules in the rating.
pub const RULE_COUNT: usize = 7;

/// Mark for a satisfied rule.
pub const FILLED_MARK: char = '\u{2605}';

/// Mark for an unsatisfied rule.
pub const EMPTY_MARK: char = '\u{2606}';

/// Thresholds applied by the rating rules. All bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingCriteria {
    /// Lowest acceptable dividend yield, percent (default: 2.0)
    pub min_dividend_yield: f64,
    /// Highest acceptable dividend yield, percent (default: 8.0)
    pub max_dividend_yield: f64,
    /// Lowest acceptable dividend CAGR, percent (default: 6.0)
    pub min_dividend_cagr: f64,
    /// Highest acceptable P/E ratio (default: 16.0)
    pub max_pe_ratio: f64,
    /// Highest acceptable payout ratio, percent (default: 60.0)
    pub max_payout_ratio: f64,
    /// Highest acceptable debt to equity ratio (default: 0.6)
    pub max_debt_to_equity: f64,
    /// Lowest acceptable discount to the Graham number, percent (default: 10.0)
    pub min_discount: f64,
}

impl Default for RatingCriteria {
    fn default() -> Self {
        Self {
            min_dividend_yield: 2.0,
            max_dividend_yield: 8.0,
            min_dividend_cagr: 6.0,
            max_pe_ratio: 16.0,
            max_payout_ratio: 60.0,
            max_debt_to_equity: 0.6,
            min_discount: 10.0,
        }
    }
}

impl RatingCriteria {
    /// Check that every threshold is a number and the yield band is not inverted.
    ///
    /// # Errors
    ///
    /// Returns [`MetricError::InvalidInput`] describing the first bad threshold.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("min_dividend_yield", self.min_dividend_yield),
            ("max_dividend_yield", self.max_dividend_yield),
            ("min_dividend_cagr", self.min_dividend_cagr),
            ("max_pe_ratio", self.max_pe_ratio),
            ("max_payout_ratio", self.max_payout_ratio),
            ("max_debt_to_equity", self.max_debt_to_equity),
            ("min_discount", self.min_discount),
        ];
        if let Some((name, _)) = thresholds.iter().find(|(_, v)| v.is_nan()) {
            return Err(MetricError::InvalidInput(format!("{name} is not a number")));
        }
        if self.min_dividend_yield > self.max_dividend_yield {
            return Err(MetricError::InvalidInput(format!(
                "dividend yield band is inverted: {} > {}",
                self.min_dividend_yield, self.max_dividend_yield
            )));
        }
        Ok(())
    }
}

/// The seven fundamentals the rules look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fundamentals {
    /// Dividend rose every year of the window.
    pub continuous_dividend_increases: bool,
    /// Current dividend yield, percent.
    pub dividend_yield: f64,
    /// Dividend CAGR, percent.
    pub dividend_cagr: f64,
    /// Price to earnings ratio.
    pub price_to_earnings_ratio: f64,
    /// Payout ratio, percent.
    pub dividend_payout_ratio: f64,
    /// Debt to equity ratio.
    pub debt_to_equity: f64,
    /// Signed discount to the Graham number, percent.
    pub discount: f64,
}

/// A rating rule, in fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The dividend rose every year of the window.
    ContinuousDividendIncreases,
    /// The dividend yield sits inside the acceptable band.
    DividendYieldInBand,
    /// The dividend grew fast enough.
    DividendGrowth,
    /// The P/E ratio is low enough.
    PriceToEarnings,
    /// The payout ratio leaves room for growth.
    PayoutRatio,
    /// Leverage is low enough.
    DebtToEquity,
    /// The price is far enough below the Graham number.
    Discount,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Self; RULE_COUNT] = [
        Self::ContinuousDividendIncreases,
        Self::DividendYieldInBand,
        Self::DividendGrowth,
        Self::PriceToEarnings,
        Self::PayoutRatio,
        Self::DebtToEquity,
        Self::Discount,
    ];

    /// The rule as a sentence, with thresholds from `c` and the lookback window.
    pub fn describe(&self, c: &RatingCriteria, periods: usize) -> String {
        match self {
            Self::ContinuousDividendIncreases => {
                format!("{periods} consecutive years of dividend increases")
            }
            Self::DividendYieldInBand => format!(
                "Dividend yield is between {}% and {}%",
                c.min_dividend_yield, c.max_dividend_yield
            ),
            Self::DividendGrowth => format!(
                "Dividend {periods}-year compound annual growth is at least {}%",
                c.min_dividend_cagr
            ),
            Self::PriceToEarnings => {
                format!("Price to earnings ratio is at most {}", c.max_pe_ratio)
            }
            Self::PayoutRatio => format!(
                "Ratio of dividends to earnings per share is at most {}%",
                c.max_payout_ratio
            ),
            Self::DebtToEquity => {
                format!("Debt to equity ratio is at most {:.2}", c.max_debt_to_equity)
            }
            Self::Discount => format!(
                "Price discount is at least {}% of fair value estimate",
                c.min_discount
            ),
        }
    }

    /// Whether the fundamentals satisfy this rule.
    pub fn is_satisfied(&self, f: &Fundamentals, c: &RatingCriteria) -> bool {
        match self {
            Self::ContinuousDividendIncreases => f.continuous_dividend_increases,
            Self::DividendYieldInBand => {
                (c.min_dividend_yield..=c.max_dividend_yield).contains(&f.dividend_yield)
            }
            Self::DividendGrowth => f.dividend_cagr >= c.min_dividend_cagr,
            Self::PriceToEarnings => f.price_to_earnings_ratio <= c.max_pe_ratio,
            Self::PayoutRatio => f.dividend_payout_ratio <= c.max_payout_ratio,
            Self::DebtToEquity => f.debt_to_equity <= c.max_debt_to_equity,
            Self::Discount => f.discount >= c.min_discount,
        }
    }
}

/// Whether one rule passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// The rule.
    pub rule: Rule,
    /// Whether it was satisfied.
    pub passed: bool,
}

/// Number of satisfied rules, out of [`RULE_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating {
    score: u8,
}

impl Rating {
    /// Build a rating from a score, capped at [`RULE_COUNT`].
    #[must_use]
    pub fn from_score(score: usize) -> Self {
        let capped = score.min(RULE_COUNT);
        Self {
            score: u8::try_from(capped).unwrap_or(u8::MAX),
        }
    }

    /// Number of satisfied rules.
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Filled marks followed by empty marks, always [`RULE_COUNT`] long.
    pub fn marks(&self) -> String {
        let filled = usize::from(self.score);
        std::iter::repeat_n(FILLED_MARK, filled)
            .chain(std::iter::repeat_n(EMPTY_MARK, RULE_COUNT - filled))
            .collect()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.marks())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Rating", 2)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("marks", &self.marks())?;
        state.end()
    }
}

/// Outcome of every rule, in evaluation order.
pub fn rule_outcomes(fundamentals: &Fundamentals, criteria: &RatingCriteria) -> Vec<RuleOutcome> {
    Rule::ALL
        .iter()
        .map(|&rule| RuleOutcome {
            rule,
            passed: rule.is_satisfied(fundamentals, criteria),
        })
        .collect()
}

/// Count the satisfied rules.
pub fn rate(fundamentals: &Fundamentals, criteria: &RatingCriteria) -> Rating {
    let score = Rule::ALL
        .iter()
        .filter(|rule| rule.is_satisfied(fundamentals, criteria))
        .count();
    Rating::from_score(score)
}
