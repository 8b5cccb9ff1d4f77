//! Daily technical-analysis scan for a fixed list of crypto tickers.
//!
//! Each run fetches daily closes, derives MACD / RSI / Bollinger Bands,
//! classifies the latest bar and sends one digest message when at least one
//! ticker triggered.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
