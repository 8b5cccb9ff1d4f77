//! Telegram Bot API notifier.

use crate::config::{Config, TelegramCredentials};
use crate::services::notifier::{Notifier, NotifyError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

pub const TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<TelegramCredentials>,
}

impl TelegramNotifier {
    pub fn from_config(config: &Config) -> Result<Self, NotifyError> {
        Self::with_base_url(config, TELEGRAM_API_BASE_URL)
    }

    pub fn with_base_url(
        config: &Config,
        base_url: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials: config.telegram.clone(),
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let credentials = self.credentials.as_ref().ok_or(NotifyError::MissingCredentials)?;
        let url = format!("{}/bot{}/sendMessage", self.base_url, credentials.token);

        // The URL carries the bot token; keep it out of error messages.
        let response = self
            .client
            .get(&url)
            .query(&[("chat_id", credentials.chat_id.as_str()), ("text", message)])
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(chat_id = %credentials.chat_id, "Telegram: message delivered");
        Ok(())
    }
}
