//! Yahoo Finance market data provider implementation

use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

use super::messages::ChartEnvelope;

pub const YAHOO_CHART_BASE_URL: &str = "https://query1.finance.yahoo.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const DAILY_INTERVAL: &str = "1d";
// Yahoo answers 429 to clients without a browser-like agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0";

/// Backoff applied to transient chart request failures.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            min_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.min_delay)
            .with_max_delay(self.max_delay)
            .with_max_times(self.max_retries)
    }
}

pub struct YahooMarketDataProvider {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl YahooMarketDataProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_base_url(YAHOO_CHART_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn fetch_chart(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let range = format!("{}d", lookback_days);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("range", range.as_str()),
                ("interval", DAILY_INTERVAL),
                ("includePrePost", "false"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            debug!(symbol = %symbol, "Yahoo: unknown symbol {}", symbol);
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(MarketDataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ChartEnvelope =
            serde_json::from_str(&body).map_err(|e| MarketDataError::Decode(e.to_string()))?;
        envelope.into_candles()
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_daily_candles(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let candles = (|| async { self.fetch_chart(symbol, lookback_days).await })
            .retry(self.retry.backoff())
            .when(MarketDataError::is_transient)
            .notify(|err: &MarketDataError, delay: Duration| {
                warn!(
                    symbol = %symbol,
                    error = %err,
                    retry_in_ms = delay.as_millis() as u64,
                    "Yahoo: chart request failed, retrying"
                );
            })
            .await?;

        debug!(
            symbol = %symbol,
            count = candles.len(),
            "Yahoo: fetched {} daily candles for {}",
            candles.len(),
            symbol
        );
        Ok(candles)
    }
}
