//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::trend::calculate_ema;
use crate::models::indicators::{MacdSeries, PriceSeries};

pub const MACD_FAST_PERIOD: u32 = 12;
pub const MACD_SLOW_PERIOD: u32 = 26;
pub const MACD_SIGNAL_PERIOD: u32 = 9;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD, seeded at the first defined MACD value
///
/// With the default periods the MACD line is defined from index 25 and the
/// signal line from index 33.
pub fn calculate_macd(
    prices: &PriceSeries,
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdSeries {
    let fast_ema = calculate_ema(prices, fast_period);
    let slow_ema = calculate_ema(prices, slow_period);

    let macd = math::difference(&fast_ema, &slow_ema);
    let signal = math::ema_series(&macd, signal_period as usize);

    MacdSeries { macd, signal }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(prices: &PriceSeries) -> MacdSeries {
    calculate_macd(prices, MACD_FAST_PERIOD, MACD_SLOW_PERIOD, MACD_SIGNAL_PERIOD)
}
