//! Technical indicators computed over a `PriceSeries`.
//!
//! Every function returns series aligned with the input, `None` marking the
//! warm-up bars.

pub mod momentum;
pub mod trend;
pub mod volatility;
