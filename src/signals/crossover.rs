//! MACD / signal line crossover detection across two consecutive bars.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    /// MACD moved from at-or-below the signal line to strictly above it.
    Bullish,
    /// MACD moved from at-or-above the signal line to strictly below it.
    Bearish,
    None,
}

/// Compare the previous and current bar. A previous bar sitting exactly on
/// the signal line still counts as the starting side of a cross.
pub fn detect_crossover(prev_macd: f64, prev_signal: f64, macd: f64, signal: f64) -> Crossover {
    if prev_macd <= prev_signal && macd > signal {
        Crossover::Bullish
    } else if prev_macd >= prev_signal && macd < signal {
        Crossover::Bearish
    } else {
        Crossover::None
    }
}
