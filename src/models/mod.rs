//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{BarSnapshot, BollingerSeries, Candle, IndicatorSet, MacdSeries, PriceSeries};
pub use signal::{SignalClassification, SignalDirection, SignalSnapshot, TickerResult};
