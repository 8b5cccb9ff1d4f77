//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::PriceSeries;

pub const RSI_PERIOD: u32 = 14;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Wilder average gain / Wilder average loss
///
/// The first bar has no predecessor and counts as a zero gain and zero
/// loss, so the output is defined from index `period - 1`. A zero average
/// loss yields 100.
pub fn calculate_rsi(prices: &PriceSeries, period: u32) -> Vec<Option<f64>> {
    let closes = prices.closes();
    if closes.is_empty() {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    gains.push(Some(0.0));
    losses.push(Some(0.0));

    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(Some(change.max(0.0)));
        losses.push(Some((-change).max(0.0)));
    }

    let avg_gain = math::wilder_series(&gains, period as usize);
    let avg_loss = math::wilder_series(&losses, period as usize);

    avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(gain, loss)| match (gain, loss) {
            (Some(_), Some(loss)) if *loss == 0.0 => Some(100.0),
            (Some(gain), Some(loss)) => Some(100.0 - (100.0 / (1.0 + gain / loss))),
            _ => None,
        })
        .collect()
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &PriceSeries) -> Vec<Option<f64>> {
    calculate_rsi(prices, RSI_PERIOD)
}
