//! Digest message formatting.

use crate::config::{report_offset, REPORT_TIMEZONE};
use crate::models::signal::TickerResult;
use chrono::{DateTime, FixedOffset, Utc};

pub const DIGEST_TITLE: &str = "Technical Analysis Signals";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `BTC-USD: Buy Signal - Price: $157.50, RSI: 28.28`
pub fn format_line(result: &TickerResult) -> Option<String> {
    let label = result.classification.label()?;
    let snapshot = result.classification.snapshot()?;
    Some(format!(
        "{}: {} - Price: ${:.2}, RSI: {:.2}",
        result.symbol, label, snapshot.close, snapshot.rsi
    ))
}

/// Header plus one line per triggered ticker, in the given order.
/// `None` when nothing triggered.
pub fn format_digest(results: &[TickerResult], at: DateTime<FixedOffset>) -> Option<String> {
    let lines: Vec<String> = results.iter().filter_map(format_line).collect();
    if lines.is_empty() {
        return None;
    }

    let mut message = format!(
        "{} ({} {}):\n",
        DIGEST_TITLE,
        at.format(TIMESTAMP_FORMAT),
        REPORT_TIMEZONE
    );
    for line in lines {
        message.push_str(&line);
        message.push('\n');
    }
    Some(message)
}

/// Current wall-clock time in the report zone.
pub fn report_time() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&report_offset())
}
