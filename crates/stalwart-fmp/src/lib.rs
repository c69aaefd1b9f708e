//! Financial Modeling Prep (FMP) data provider for stalwart.
//!
//! This crate provides a client for the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) stable API and
//! implements the stalwart provider traits on top of it:
//! - Financial history from annual `ratios`
//! - Price series from `historical-price-eod/full`
//! - Market snapshot from `ratios-ttm` and `profile`
//!
//! # Usage
//!
//! ```rust,ignore
//! use stalwart_fmp::FmpClient;
//! use stalwart_traits::PriceSeriesProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // Daily closes, newest first
//!     let prices = client.fetch_price_series("JNJ").await?;
//!
//!     // Company name and sector
//!     let profile = client.profile("JNJ").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use provider::{history_from_ratios, series_from_prices, snapshot_from};
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
