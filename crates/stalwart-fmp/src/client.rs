//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{FinancialRatios, HistoricalPrice, Period, Profile, RatiosTtm},
};
use reqwest::Client;
use std::env;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a `.env` file exists but cannot be loaded, or if
    /// the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            return Err(err.into());
        }

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        tracing::debug!(endpoint, "FMP request");
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Errors come back as 200 with an error object
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Get the first element of a list endpoint, or `SymbolNotFound`.
    async fn get_one<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        symbol: &str,
    ) -> Result<T> {
        let items: Vec<T> = self.get(endpoint).await?;
        items
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Get financial ratios for a symbol, most recent period first.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol
    /// * `period` - Annual or quarterly
    /// * `limit` - Number of periods to return
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn ratios(
        &self,
        symbol: &str,
        period: Period,
        limit: Option<u32>,
    ) -> Result<Vec<FinancialRatios>> {
        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        let endpoint = format!(
            "ratios?symbol={}&period={}{}",
            symbol.to_uppercase(),
            period.as_str(),
            limit_param
        );
        self.get(&endpoint).await
    }

    /// Get trailing twelve month ratios for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn ratios_ttm(&self, symbol: &str) -> Result<RatiosTtm> {
        let endpoint = format!("ratios-ttm?symbol={}", symbol.to_uppercase());
        self.get_one(&endpoint, symbol).await
    }

    /// Get the company profile for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn profile(&self, symbol: &str) -> Result<Profile> {
        let endpoint = format!("profile?symbol={}", symbol.to_uppercase());
        self.get_one(&endpoint, symbol).await
    }

    /// Get historical daily prices for a symbol, newest first.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Stock ticker symbol
    /// * `from` - Start date (YYYY-MM-DD)
    /// * `to` - End date (YYYY-MM-DD)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<HistoricalPrice>> {
        let mut params = String::new();
        if let Some(f) = from {
            params.push_str(&format!("&from={f}"));
        }
        if let Some(t) = to {
            params.push_str(&format!("&to={t}"));
        }

        let endpoint = format!(
            "historical-price-eod/full?symbol={}{}",
            symbol.to_uppercase(),
            params
        );
        // The stable API returns a flat array, not a wrapped response
        self.get(&endpoint).await
    }
}
