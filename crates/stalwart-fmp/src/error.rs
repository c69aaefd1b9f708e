//! Error types for the FMP API client.

use stalwart_traits::ProviderError;
use thiserror::Error;

/// Errors that can occur when using the FMP API.
#[derive(Debug, Error)]
pub enum FmpError {
    /// Missing API key.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("FMP API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Free tier allows 250 requests/day.")]
    RateLimitExceeded,

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No data available.
    #[error("No data available for {0}")]
    NoData(String),

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}

impl From<FmpError> for ProviderError {
    fn from(err: FmpError) -> Self {
        match err {
            FmpError::MissingApiKey | FmpError::Env(_) => Self::Config(err.to_string()),
            FmpError::Request(e) => Self::Request(e.to_string()),
            FmpError::Api(message) => Self::Request(message),
            FmpError::Json(e) => Self::Decode(e.to_string()),
            FmpError::RateLimitExceeded => Self::RateLimited,
            FmpError::SymbolNotFound(symbol) => Self::SymbolNotFound(symbol),
            FmpError::NoData(what) => Self::NoData(what),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_mapping() {
        assert!(matches!(
            ProviderError::from(FmpError::RateLimitExceeded),
            ProviderError::RateLimited
        ));
        assert!(matches!(
            ProviderError::from(FmpError::MissingApiKey),
            ProviderError::Config(_)
        ));
        assert!(matches!(
            ProviderError::from(FmpError::SymbolNotFound("XYZ".into())),
            ProviderError::SymbolNotFound(s) if s == "XYZ"
        ));
        assert!(matches!(
            ProviderError::from(FmpError::Api("HTTP 500".into())),
            ProviderError::Request(_)
        ));

        assert!(matches!(
            ProviderError::from(FmpError::from(dotenvy::Error::LineParse("=bad".into(), 0))),
            ProviderError::Config(_)
        ));

        let json = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(
            ProviderError::from(FmpError::Json(json)),
            ProviderError::Decode(_)
        ));
    }
}
