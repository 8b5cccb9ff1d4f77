//! Unit tests for signal engine

use crossover_alert::models::indicators::{BarSnapshot, PriceSeries};
use crossover_alert::models::signal::{SignalClassification, SignalDirection, SignalSnapshot};
use crossover_alert::signals::engine::{SignalEngine, MIN_PRICES, RSI_OVERBOUGHT, RSI_OVERSOLD};

use crate::fixtures::{flat_series, BUY_SERIES};

fn buy_bars() -> BarSnapshot {
    BarSnapshot {
        prev_macd: -1.2,
        prev_signal: -1.0,
        macd: -0.8,
        signal: -0.9,
        rsi: 28.0,
        close: 95.0,
        upper_band: 110.0,
        lower_band: 96.0,
    }
}

fn sell_bars() -> BarSnapshot {
    BarSnapshot {
        prev_macd: 1.2,
        prev_signal: 1.0,
        macd: 0.8,
        signal: 0.9,
        rsi: 72.0,
        close: 111.0,
        upper_band: 110.0,
        lower_band: 96.0,
    }
}

#[test]
fn test_min_prices_covers_signal_warm_up() {
    assert_eq!(MIN_PRICES, 35);
    assert_eq!(RSI_OVERSOLD, 35.0);
    assert_eq!(RSI_OVERBOUGHT, 65.0);
}

#[test]
fn test_snapshot_buy() {
    let result = SignalEngine::classify_snapshot(&buy_bars());
    assert_eq!(
        result,
        SignalClassification::Buy(SignalSnapshot {
            close: 95.0,
            rsi: 28.0
        })
    );
    assert_eq!(result.direction(), Some(SignalDirection::Buy));
    assert_eq!(result.label(), Some("Buy Signal"));
}

#[test]
fn test_snapshot_sell() {
    let result = SignalEngine::classify_snapshot(&sell_bars());
    assert_eq!(result.direction(), Some(SignalDirection::Sell));
    assert_eq!(result.close(), Some(111.0));
    assert_eq!(result.rsi(), Some(72.0));
    assert_eq!(result.label(), Some("Sell Signal"));
}

#[test]
fn test_buy_with_flat_touch_on_previous_bar() {
    let bars = BarSnapshot {
        prev_macd: -1.0,
        ..buy_bars()
    };
    assert!(matches!(SignalEngine::classify_snapshot(&bars), SignalClassification::Buy(_)));
}

#[test]
fn test_rsi_thresholds_are_strict() {
    let bars = BarSnapshot { rsi: 35.0, ..buy_bars() };
    assert!(SignalEngine::classify_snapshot(&bars).is_none());

    let bars = BarSnapshot { rsi: 65.0, ..sell_bars() };
    assert!(SignalEngine::classify_snapshot(&bars).is_none());
}

#[test]
fn test_band_breach_is_strict() {
    let bars = BarSnapshot { close: 96.0, ..buy_bars() };
    assert!(SignalEngine::classify_snapshot(&bars).is_none());

    let bars = BarSnapshot { close: 110.0, ..sell_bars() };
    assert!(SignalEngine::classify_snapshot(&bars).is_none());
}

#[test]
fn test_crossover_alone_is_not_enough() {
    // Bullish cross, but momentum is overbought and price above the band
    let bars = BarSnapshot {
        rsi: 70.0,
        close: 112.0,
        ..buy_bars()
    };
    assert!(SignalEngine::classify_snapshot(&bars).is_none());
}

#[test]
fn test_extremes_without_crossover_is_none() {
    let bars = BarSnapshot {
        prev_macd: -0.5,
        prev_signal: -1.0,
        ..buy_bars()
    };
    assert!(SignalEngine::classify_snapshot(&bars).is_none());
}

#[test]
fn test_classify_insufficient_data() {
    for len in 0..MIN_PRICES {
        let prices = PriceSeries::new(BUY_SERIES[..len].to_vec());
        assert!(SignalEngine::classify(&prices).is_none(), "len {}", len);
    }
}

#[test]
fn test_classify_empty_series() {
    assert_eq!(SignalEngine::classify(&PriceSeries::default()), SignalClassification::None);
}

#[test]
fn test_classify_flat_series() {
    let prices = PriceSeries::new(flat_series(120));
    assert!(SignalEngine::classify(&prices).is_none());
}

#[test]
fn test_indicators_are_aligned() {
    let prices = PriceSeries::new(BUY_SERIES.to_vec());
    let set = SignalEngine::indicators(&prices);
    assert_eq!(set.macd.macd.len(), prices.len());
    assert_eq!(set.macd.signal.len(), prices.len());
    assert_eq!(set.rsi.len(), prices.len());
    assert_eq!(set.bollinger.upper.len(), prices.len());
    assert_eq!(set.bollinger.lower.len(), prices.len());
}
