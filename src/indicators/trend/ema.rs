//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::PriceSeries;

/// EMA of the closes, `None` for the first `period - 1` bars.
pub fn calculate_ema(prices: &PriceSeries, period: u32) -> Vec<Option<f64>> {
    math::ema_series(&math::defined(prices.closes()), period as usize)
}
