//! Evaluation configuration.

use crate::rating::RatingCriteria;
use serde::{Deserialize, Serialize};
use stalwart_metrics::GrahamConfig;
use stalwart_traits::Result;

/// Default number of days subtracted from the evaluation date before looking
/// up the close price.
pub const DEFAULT_PRICE_LAG_DAYS: u32 = 1;

/// Configuration for one evaluation run.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Rating thresholds
    pub criteria: RatingCriteria,
    /// Graham number multiplier
    pub graham: GrahamConfig,
    /// Days between the evaluation date and the close looked up (default: 1)
    pub price_lag_days: u32,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            criteria: RatingCriteria::default(),
            graham: GrahamConfig::default(),
            price_lag_days: DEFAULT_PRICE_LAG_DAYS,
        }
    }
}

impl EvaluationConfig {
    /// Replace the rating thresholds.
    #[must_use]
    pub fn with_criteria(mut self, criteria: RatingCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Replace the Graham configuration.
    #[must_use]
    pub const fn with_graham(mut self, graham: GrahamConfig) -> Self {
        self.graham = graham;
        self
    }

    /// Check the thresholds before any data is fetched.
    ///
    /// # Errors
    ///
    /// Propagates [`RatingCriteria::validate`] errors.
    pub fn validate(&self) -> Result<()> {
        self.criteria.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = EvaluationConfig::default();
        assert_eq!(config.price_lag_days, 1);
        assert_relative_eq!(config.graham.multiplier, 24.0);
        assert_eq!(config.criteria, RatingCriteria::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overlay() {
        let config: EvaluationConfig = serde_json::from_str(
            r#"{"graham": {"multiplier": 22.5}, "criteria": {"min_discount": 15.0}}"#,
        )
        .unwrap();
        assert_relative_eq!(config.graham.multiplier, 22.5);
        assert_relative_eq!(config.criteria.min_discount, 15.0);
        assert_relative_eq!(config.criteria.max_pe_ratio, 16.0);
        assert_eq!(config.price_lag_days, 1);
    }

    #[test]
    fn test_builders() {
        let config = EvaluationConfig::default()
            .with_graham(GrahamConfig::classic())
            .with_criteria(RatingCriteria {
                max_pe_ratio: 20.0,
                ..Default::default()
            });
        assert_relative_eq!(config.graham.multiplier, 22.5);
        assert_relative_eq!(config.criteria.max_pe_ratio, 20.0);
    }
}
