//! One scan: fetch daily prices for the fixed ticker list, classify each
//! ticker's latest bar and send a Telegram digest if anything triggered.
//!
//! Meant to be triggered by an external schedule (cron, CI). Per-ticker and
//! delivery failures are logged and the process still exits successfully.

use crossover_alert::config::Config;
use crossover_alert::core::runtime::{RuntimeConfig, SignalRuntime};
use crossover_alert::logging;
use crossover_alert::services::{TelegramNotifier, YahooMarketDataProvider};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = Config::from_env();
    logging::init_logging(&config);

    info!(environment = %config.environment, "Starting crossover-alert scan");

    let notifier = TelegramNotifier::from_config(&config)?;
    if !notifier.has_credentials() {
        warn!(
            "TELEGRAM_TOKEN or TELEGRAM_CHAT_ID missing; signals will be logged but not delivered"
        );
    }
    let provider = YahooMarketDataProvider::new()?;

    let runtime = SignalRuntime::new(
        RuntimeConfig::default(),
        Arc::new(provider),
        Arc::new(notifier),
    );
    let report = runtime.run().await;

    info!(
        triggered = report.triggered(),
        failed = report.failures.len(),
        notification = ?report.notification,
        signals = %report.signals_json(),
        "Scan complete"
    );

    Ok(())
}
