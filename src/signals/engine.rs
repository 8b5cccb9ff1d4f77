//! Signal engine: indicators for one price series and the Buy/Sell rule on
//! its latest bar.

use crate::indicators::momentum::{calculate_macd_default, calculate_rsi_default};
use crate::indicators::momentum::{MACD_SIGNAL_PERIOD, MACD_SLOW_PERIOD};
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::indicators::{BarSnapshot, IndicatorSet, PriceSeries};
use crate::models::signal::{SignalClassification, SignalSnapshot};
use crate::signals::crossover::{detect_crossover, Crossover};
use tracing::debug;

/// Shortest series whose MACD signal line is defined at both `t - 1` and `t`.
pub const MIN_PRICES: usize = (MACD_SLOW_PERIOD + MACD_SIGNAL_PERIOD) as usize;

/// A Buy needs RSI strictly below this.
pub const RSI_OVERSOLD: f64 = 35.0;
/// A Sell needs RSI strictly above this.
pub const RSI_OVERBOUGHT: f64 = 65.0;

pub struct SignalEngine;

impl SignalEngine {
    /// Compute every indicator the rule needs from one snapshot of prices.
    pub fn indicators(prices: &PriceSeries) -> IndicatorSet {
        IndicatorSet {
            macd: calculate_macd_default(prices),
            rsi: calculate_rsi_default(prices),
            bollinger: calculate_bollinger_bands_default(prices),
        }
    }

    /// Classify the most recent bar. Short or empty series yield `None`.
    pub fn classify(prices: &PriceSeries) -> SignalClassification {
        if prices.len() < MIN_PRICES {
            return SignalClassification::None;
        }

        let indicators = Self::indicators(prices);
        match indicators.latest_bars(prices) {
            Some(bars) => {
                let classification = Self::classify_snapshot(&bars);
                debug!(
                    close = bars.close,
                    macd = bars.macd,
                    signal = bars.signal,
                    rsi = bars.rsi,
                    upper_band = bars.upper_band,
                    lower_band = bars.lower_band,
                    direction = ?classification.direction(),
                    "latest bar evaluated"
                );
                classification
            }
            None => SignalClassification::None,
        }
    }

    /// Apply the crossover + RSI + band rule to pre-extracted values.
    ///
    /// Buy and Sell require opposite crossovers, so at most one can hold.
    pub fn classify_snapshot(bars: &BarSnapshot) -> SignalClassification {
        let snapshot = SignalSnapshot {
            close: bars.close,
            rsi: bars.rsi,
        };

        match detect_crossover(bars.prev_macd, bars.prev_signal, bars.macd, bars.signal) {
            Crossover::Bullish if bars.rsi < RSI_OVERSOLD && bars.close < bars.lower_band => {
                SignalClassification::Buy(snapshot)
            }
            Crossover::Bearish if bars.rsi > RSI_OVERBOUGHT && bars.close > bars.upper_band => {
                SignalClassification::Sell(snapshot)
            }
            _ => SignalClassification::None,
        }
    }
}
