//! Notification delivery interface.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification credentials missing (set TELEGRAM_TOKEN and TELEGRAM_CHAT_ID)")]
    MissingCredentials,
    #[error("delivery request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("delivery rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait Notifier {
    /// Deliver one text message. Implementations do not retry.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}
