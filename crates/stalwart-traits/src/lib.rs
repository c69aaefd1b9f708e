#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/stalwart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core definitions for the stalwart equity screener.
//!
//! This crate provides the data model shared by the metric and rating
//! engines, the error taxonomy, and the traits external data sources
//! implement.

/// The version of the stalwart-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod provider;
pub mod types;

// Re-exports
pub use error::{
    EvaluationError, EvaluationErrorKind, MetricError, ProviderError, ProviderResult, Result,
};
pub use provider::{
    DataProvider, FinancialHistoryProvider, MarketStatisticsProvider, PriceSeriesProvider,
};
pub use types::{
    DEFAULT_PERIODS, Date, FinancialHistory, FinancialYearRecord, MarketSnapshot, PriceQuote,
    PriceSeries, RecordField, Security, Symbol,
};
