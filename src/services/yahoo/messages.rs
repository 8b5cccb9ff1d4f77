//! Response shapes of the Yahoo Finance v8 chart endpoint.

use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataError;
use chrono::DateTime;
use serde::Deserialize;

/// `chart.error.code` for symbols Yahoo does not know.
pub const NOT_FOUND_CODE: &str = "Not Found";

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Candles from the first result, or an empty vector for unknown symbols.
    pub fn into_candles(self) -> Result<Vec<Candle>, MarketDataError> {
        if let Some(error) = self.chart.error {
            if error.code == NOT_FOUND_CODE {
                return Ok(Vec::new());
            }
            return Err(MarketDataError::Provider {
                code: error.code,
                description: error.description.unwrap_or_default(),
            });
        }

        match self.chart.result.and_then(|results| results.into_iter().next()) {
            Some(result) => Ok(result.into_candles()),
            None => Ok(Vec::new()),
        }
    }
}

impl ChartResult {
    /// Bars with a missing close (e.g. the still-open session on some feeds)
    /// are dropped.
    pub fn into_candles(self) -> Vec<Candle> {
        let timestamps = self.timestamp.unwrap_or_default();
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();
        let at = |series: &[Option<f64>], i: usize| series.get(i).copied().flatten();

        let mut candles: Vec<Candle> = timestamps
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let close = at(&quote.close, i).filter(|c| c.is_finite())?;
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                Some(Candle::new(
                    at(&quote.open, i).unwrap_or(close),
                    at(&quote.high, i).unwrap_or(close),
                    at(&quote.low, i).unwrap_or(close),
                    close,
                    at(&quote.volume, i).unwrap_or(0.0),
                    timestamp,
                ))
            })
            .collect();

        candles.sort_by_key(|c| c.timestamp);
        candles
    }
}
