//! Rating and evaluation for the stalwart screener.
//!
//! This crate turns fetched data into a scorecard:
//! - Evaluation: derives every fundamental for one ticker, all or nothing
//! - Rating: seven threshold rules reduced to a count of satisfied rules
//! - Configuration: rating thresholds, Graham multiplier and price lag
//!
//! # Example
//!
//! ```rust,ignore
//! use stalwart_eval::{EvaluationConfig, Evaluator};
//!
//! let evaluator = Evaluator::new(provider, EvaluationConfig::default());
//! let metrics = evaluator.evaluate_ticker("JNJ", 5, None, today).await?;
//! println!("{} {}", metrics.ticker, metrics.rating);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod evaluator;
pub mod rating;

// Re-export main types
pub use config::EvaluationConfig;
pub use evaluator::{DerivedMetrics, EvaluationInputs, Evaluator, evaluate_inputs};
pub use rating::{Fundamentals, Rating, RatingCriteria, Rule, RuleOutcome, rate, rule_outcomes};
