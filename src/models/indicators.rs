use chrono::{DateTime, Utc};

/// One daily bar as returned by the market data collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// Closing prices ordered oldest first.
///
/// Built once per ticker per run and never mutated afterwards, so every
/// indicator is derived from the same snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(closes: Vec<f64>) -> Self {
        Self {
            closes: closes.into_iter().filter(|c| c.is_finite()).collect(),
        }
    }

    pub fn from_candles(candles: &[Candle]) -> Self {
        Self::new(candles.iter().map(|c| c.close).collect())
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}

/// MACD line and its signal line, aligned with the price index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
}

/// Bollinger envelope aligned with the price index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Every indicator the classifier consults, same length as the price series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndicatorSet {
    pub macd: MacdSeries,
    pub rsi: Vec<Option<f64>>,
    pub bollinger: BollingerSeries,
}

/// The values the classification rule reads at `t - 1` and `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSnapshot {
    pub prev_macd: f64,
    pub prev_signal: f64,
    pub macd: f64,
    pub signal: f64,
    pub rsi: f64,
    pub close: f64,
    pub upper_band: f64,
    pub lower_band: f64,
}

impl IndicatorSet {
    /// Snapshot of the last two bars, or `None` while any required value is
    /// still warming up.
    pub fn latest_bars(&self, prices: &PriceSeries) -> Option<BarSnapshot> {
        let len = prices.len();
        if len < 2 {
            return None;
        }
        let (t, prev) = (len - 1, len - 2);

        Some(BarSnapshot {
            prev_macd: value_at(&self.macd.macd, prev)?,
            prev_signal: value_at(&self.macd.signal, prev)?,
            macd: value_at(&self.macd.macd, t)?,
            signal: value_at(&self.macd.signal, t)?,
            rsi: value_at(&self.rsi, t)?,
            close: prices.closes()[t],
            upper_band: value_at(&self.bollinger.upper, t)?,
            lower_band: value_at(&self.bollinger.lower, t)?,
        })
    }
}

fn value_at(series: &[Option<f64>], index: usize) -> Option<f64> {
    series.get(index).copied().flatten()
}
