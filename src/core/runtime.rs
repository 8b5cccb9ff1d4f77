//! Run orchestration: fetch, classify, aggregate, notify.

use crate::config::{LOOKBACK_DAYS, TICKERS};
use crate::core::digest::{format_digest, report_time};
use crate::models::indicators::PriceSeries;
use crate::models::signal::{SignalClassification, TickerResult};
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::{Notifier, NotifyError};
use crate::signals::engine::SignalEngine;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration for one run
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub tickers: Vec<String>,
    pub lookback_days: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tickers: TICKERS.iter().map(|t| t.to_string()).collect(),
            lookback_days: LOOKBACK_DAYS,
        }
    }
}

/// Why a ticker produced no classification this run.
#[derive(Debug, Error)]
pub enum TickerError {
    #[error("market data unavailable for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },
    #[error("no price history returned for {symbol}")]
    EmptySeries { symbol: String },
}

impl TickerError {
    pub fn symbol(&self) -> &str {
        match self {
            TickerError::DataUnavailable { symbol, .. } | TickerError::EmptySeries { symbol } => {
                symbol
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// Nothing triggered, so nothing was sent.
    Skipped,
    Delivered,
    Failed(String),
}

/// What happened during one run.
#[derive(Debug)]
pub struct RunReport {
    /// Triggered tickers only, in ticker-list order.
    pub results: Vec<TickerResult>,
    pub failures: Vec<TickerError>,
    pub digest: Option<String>,
    pub notification: NotificationOutcome,
}

impl RunReport {
    pub fn triggered(&self) -> usize {
        self.results.len()
    }

    /// Triggered tickers as a JSON array, for the end-of-run log line.
    pub fn signals_json(&self) -> String {
        serde_json::to_string(&self.results).unwrap_or_default()
    }
}

/// Sequential scan over the configured tickers.
pub struct SignalRuntime {
    config: RuntimeConfig,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
}

impl SignalRuntime {
    pub fn new(
        config: RuntimeConfig,
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            provider,
            notifier,
        }
    }

    /// Fetch one ticker's history and classify its latest bar.
    pub async fn evaluate_ticker(&self, symbol: &str) -> Result<SignalClassification, TickerError> {
        let candles = self
            .provider
            .get_daily_candles(symbol, self.config.lookback_days)
            .await
            .map_err(|e| TickerError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        let prices = PriceSeries::from_candles(&candles);
        if prices.is_empty() {
            return Err(TickerError::EmptySeries {
                symbol: symbol.to_string(),
            });
        }

        debug!(symbol = %symbol, bars = prices.len(), "classifying {}", symbol);
        Ok(SignalEngine::classify(&prices))
    }

    /// Classify every ticker in order. One ticker failing never stops the
    /// others.
    pub async fn collect_signals(&self) -> (Vec<TickerResult>, Vec<TickerError>) {
        let mut results = Vec::new();
        let mut failures = Vec::new();

        for symbol in &self.config.tickers {
            match self.evaluate_ticker(symbol).await {
                Ok(classification) if classification.is_none() => {
                    debug!(symbol = %symbol, "no signal for {}", symbol);
                }
                Ok(classification) => {
                    info!(
                        symbol = %symbol,
                        direction = ?classification.direction(),
                        close = ?classification.close(),
                        rsi = ?classification.rsi(),
                        "signal triggered for {}",
                        symbol
                    );
                    results.push(TickerResult::new(symbol.clone(), classification));
                }
                Err(e) => {
                    warn!(symbol = %e.symbol(), error = %e, "skipping {}", e.symbol());
                    failures.push(e);
                }
            }
        }

        (results, failures)
    }

    /// One full run. Sends at most one message and never fails.
    pub async fn run(&self) -> RunReport {
        info!(tickers = self.config.tickers.len(), "scan started");

        let (results, failures) = self.collect_signals().await;
        let digest = format_digest(&results, report_time());

        let notification = match &digest {
            None => {
                info!("no signals this run, staying silent");
                NotificationOutcome::Skipped
            }
            Some(message) => match self.notifier.send(message).await {
                Ok(()) => {
                    info!(signals = results.len(), "digest delivered");
                    NotificationOutcome::Delivered
                }
                Err(e @ NotifyError::MissingCredentials) => {
                    warn!(error = %e, "digest not sent");
                    NotificationOutcome::Failed(e.to_string())
                }
                Err(e) => {
                    warn!(error = %e, "digest delivery failed");
                    NotificationOutcome::Failed(e.to_string())
                }
            },
        };

        info!(
            triggered = results.len(),
            failed = failures.len(),
            "scan finished"
        );

        RunReport {
            results,
            failures,
            digest,
            notification,
        }
    }
}
