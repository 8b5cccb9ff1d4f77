//! Signal evaluation: crossover detection and the per-ticker classifier.

pub mod crossover;
pub mod engine;

pub use crossover::{detect_crossover, Crossover};
pub use engine::{SignalEngine, MIN_PRICES, RSI_OVERBOUGHT, RSI_OVERSOLD};
