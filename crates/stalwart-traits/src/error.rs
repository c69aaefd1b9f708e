//! Error types for the stalwart screener.
//!
//! Three layers are distinguished: [`ProviderError`] for upstream data that
//! could not be fetched or decoded, [`MetricError`] for degenerate or missing
//! inputs found while deriving a fundamental, and [`EvaluationError`], the
//! umbrella reported to callers with the offending ticker and metric.

use crate::Symbol;
use thiserror::Error;

/// Failure reported by an external data provider.
///
/// Providers are never retried by the core; the error is propagated to the
/// caller as part of an [`EvaluationError`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request could not be completed (network, TLS, HTTP status).
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The provider throttled the request.
    #[error("rate limit exceeded")]
    RateLimited,

    /// The provider does not know the ticker.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered but returned nothing usable.
    #[error("no data available for {0}")]
    NoData(String),

    /// Provider-specific configuration problem (missing API key, etc.).
    #[error("provider configuration: {0}")]
    Config(String),
}

/// Failure while deriving a single fundamental from already-fetched data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    /// Fewer fiscal years than the lookback window requires.
    #[error("insufficient history: need {required} years, have {available}")]
    InsufficientHistory {
        /// Years required by the lookback window.
        required: usize,
        /// Years actually available.
        available: usize,
    },

    /// Fiscal years inside the window are out of order or have a gap.
    #[error("non-contiguous history: fiscal year {previous} followed by {next}")]
    NonContiguousHistory {
        /// The earlier year of the offending pair.
        previous: i32,
        /// The later year of the offending pair.
        next: i32,
    },

    /// A required per-year value is absent or not a finite number.
    #[error("missing {field} for fiscal year {fiscal_year}")]
    MissingField {
        /// Fiscal year of the record.
        fiscal_year: i32,
        /// Name of the missing field.
        field: &'static str,
    },

    /// The price series contains no quotes.
    #[error("no price data available")]
    NoPriceData,

    /// A derivation would divide by zero.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    /// A snapshot field holds no parseable number.
    #[error("unparsable {field}: {value:?}")]
    UnparsableField {
        /// Name of the snapshot field.
        field: &'static str,
        /// Raw text that failed to parse.
        value: String,
    },

    /// The inputs fall outside the mathematical domain of the formula.
    #[error("domain error: {0}")]
    Domain(String),

    /// Caller supplied an invalid argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Underlying cause of an [`EvaluationError`].
#[derive(Debug, Error)]
pub enum EvaluationErrorKind {
    /// Upstream data could not be obtained.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A metric could not be derived.
    #[error(transparent)]
    Metric(#[from] MetricError),
}

/// Evaluation of one ticker failed.
///
/// Carries enough context to report the failure or to skip the ticker and
/// continue in a batch.
#[derive(Debug, Error)]
#[error("{ticker}: {metric} failed: {kind}")]
pub struct EvaluationError {
    /// Ticker whose evaluation failed.
    pub ticker: Symbol,
    /// Metric (or `"fetch"` stage) that failed.
    pub metric: &'static str,
    /// The underlying cause.
    pub kind: EvaluationErrorKind,
}

impl EvaluationError {
    /// Wrap a cause with the ticker and failing metric.
    pub fn new(
        ticker: impl Into<Symbol>,
        metric: &'static str,
        kind: impl Into<EvaluationErrorKind>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            metric,
            kind: kind.into(),
        }
    }

    /// Whether the failure came from a data provider rather than the data itself.
    pub const fn is_provider_error(&self) -> bool {
        matches!(self.kind, EvaluationErrorKind::Provider(_))
    }
}

/// A specialized Result type for metric derivation.
pub type Result<T> = std::result::Result<T, MetricError>;

/// A specialized Result type for provider calls.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_error_display() {
        let err = MetricError::InsufficientHistory {
            required: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "insufficient history: need 5 years, have 3"
        );

        let err = MetricError::MissingField {
            fiscal_year: 2021,
            field: "dividend_per_share",
        };
        assert_eq!(
            err.to_string(),
            "missing dividend_per_share for fiscal year 2021"
        );
    }

    #[test]
    fn test_evaluation_error_context() {
        let err = EvaluationError::new("KO", "graham_number", MetricError::Domain("x".into()));
        assert_eq!(err.ticker, "KO");
        assert_eq!(err.metric, "graham_number");
        assert!(!err.is_provider_error());
        assert_eq!(err.to_string(), "KO: graham_number failed: domain error: x");
    }

    #[test]
    fn test_provider_error_wraps() {
        let err = EvaluationError::new("T", "fetch", ProviderError::RateLimited);
        assert!(err.is_provider_error());
        assert!(err.to_string().contains("rate limit exceeded"));
    }
}
