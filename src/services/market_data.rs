//! Market data provider interface.

use crate::models::indicators::Candle;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("provider error {code}: {description}")]
    Provider { code: String, description: String },
}

impl MarketDataError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            MarketDataError::Status { status, .. } => *status == 429 || *status >= 500,
            MarketDataError::Decode(_) | MarketDataError::Provider { .. } => false,
        }
    }
}

#[async_trait]
pub trait MarketDataProvider {
    /// Daily candles for `symbol` covering roughly the last `lookback_days`,
    /// oldest first.
    ///
    /// Unknown symbols return an empty vector rather than an error. Retries,
    /// if any, happen inside the implementation.
    async fn get_daily_candles(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
