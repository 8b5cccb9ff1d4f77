//! Process configuration.
//!
//! Everything tunable about the analysis is a constant here. The only values
//! read from the environment are the Telegram credentials and the
//! environment name used to pick a log format.

use chrono::{FixedOffset, Offset, Utc};
use std::env;

/// Tickers scanned on every run, in digest order.
pub const TICKERS: [&str; 10] = [
    "BTC-USD", "ETH-USD", "SOL-USD", "ADA-USD", "XRP-USD", "DOGE-USD", "BNB-USD", "AVAX-USD",
    "LINK-USD", "DOT-USD",
];

/// Daily bars requested per ticker.
pub const LOOKBACK_DAYS: u32 = 300;

/// Zone name shown next to the digest timestamp.
pub const REPORT_TIMEZONE: &str = "Europe/Istanbul";

/// Turkey has stayed on UTC+03:00 all year since 2016.
const REPORT_UTC_OFFSET_SECONDS: i32 = 3 * 3600;

pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Name of the deployment environment (`production`, `sandbox`, ...).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .ok()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

/// Offset used when stamping the digest header.
pub fn report_offset() -> FixedOffset {
    FixedOffset::east_opt(REPORT_UTC_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Bot token plus destination chat for the Telegram notifier.
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub token: String,
    pub chat_id: String,
}

impl TelegramCredentials {
    /// Both values must be present and non-blank.
    pub fn new(token: Option<String>, chat_id: Option<String>) -> Option<Self> {
        let token = token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())?;
        let chat_id = chat_id.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())?;
        Some(Self { token, chat_id })
    }
}

impl std::fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Configuration built once at startup and handed to the collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub telegram: Option<TelegramCredentials>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            environment: get_environment(),
            telegram: TelegramCredentials::new(
                env::var(TELEGRAM_TOKEN_VAR).ok(),
                env::var(TELEGRAM_CHAT_ID_VAR).ok(),
            ),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}
