use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalDirection {
    Buy,
    Sell,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalDirection::Buy => write!(f, "Buy"),
            SignalDirection::Sell => write!(f, "Sell"),
        }
    }
}

/// Close and RSI at the evaluated bar, carried into the digest line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalSnapshot {
    pub close: f64,
    pub rsi: f64,
}

/// Outcome for the most recent bar of one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SignalClassification {
    Buy(SignalSnapshot),
    Sell(SignalSnapshot),
    None,
}

impl SignalClassification {
    pub fn is_none(&self) -> bool {
        matches!(self, SignalClassification::None)
    }

    pub fn direction(&self) -> Option<SignalDirection> {
        match self {
            SignalClassification::Buy(_) => Some(SignalDirection::Buy),
            SignalClassification::Sell(_) => Some(SignalDirection::Sell),
            SignalClassification::None => None,
        }
    }

    pub fn snapshot(&self) -> Option<&SignalSnapshot> {
        match self {
            SignalClassification::Buy(s) | SignalClassification::Sell(s) => Some(s),
            SignalClassification::None => None,
        }
    }

    pub fn close(&self) -> Option<f64> {
        self.snapshot().map(|s| s.close)
    }

    pub fn rsi(&self) -> Option<f64> {
        self.snapshot().map(|s| s.rsi)
    }

    /// Human label used in the digest.
    pub fn label(&self) -> Option<&'static str> {
        self.direction().map(|d| match d {
            SignalDirection::Buy => "Buy Signal",
            SignalDirection::Sell => "Sell Signal",
        })
    }
}

/// A triggered ticker for the current run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerResult {
    pub symbol: String,
    pub classification: SignalClassification,
}

impl TickerResult {
    pub fn new(symbol: impl Into<String>, classification: SignalClassification) -> Self {
        Self {
            symbol: symbol.into(),
            classification,
        }
    }
}
