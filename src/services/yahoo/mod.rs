//! Yahoo Finance chart API client.

pub mod messages;
pub mod provider;

pub use provider::{RetryPolicy, YahooMarketDataProvider, YAHOO_CHART_BASE_URL};
