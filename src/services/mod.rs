//! External collaborators: market data retrieval and notification delivery.

pub mod market_data;
pub mod notifier;
pub mod telegram;
pub mod yahoo;

pub use market_data::{MarketDataError, MarketDataProvider};
pub use notifier::{NotifyError, Notifier};
pub use telegram::TelegramNotifier;
pub use yahoo::YahooMarketDataProvider;
