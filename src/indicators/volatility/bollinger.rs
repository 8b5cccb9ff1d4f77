//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::{BollingerSeries, PriceSeries};

pub const BOLLINGER_PERIOD: u32 = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
pub fn calculate_bollinger_bands(
    prices: &PriceSeries,
    period: u32,
    std_dev: f64,
) -> BollingerSeries {
    let closes = prices.closes();
    let middle = math::rolling(closes, period as usize, math::mean);
    let deviation = math::rolling(closes, period as usize, math::population_std_dev);

    let band = |sign: f64| -> Vec<Option<f64>> {
        middle
            .iter()
            .zip(&deviation)
            .map(|(m, d)| match (m, d) {
                (Some(m), Some(d)) => Some(m + sign * std_dev * d),
                _ => None,
            })
            .collect()
    };

    let upper = band(1.0);
    let lower = band(-1.0);

    BollingerSeries { upper, middle, lower }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(prices: &PriceSeries) -> BollingerSeries {
    calculate_bollinger_bands(prices, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
