use anyhow::{Context, bail};
use std::env;

use business::domain::reminder::model::ReminderOffset;

/// Reminder scheduling configuration
#[derive(Debug, Clone)]
pub struct ReminderConfig {
    pub offsets: Vec<ReminderOffset>,
    pub webhook_url: Option<String>,
}

impl ReminderConfig {
    /// Load reminder configuration from environment variables
    ///
    /// Environment variables:
    /// - REMINDER_OFFSETS: comma-separated days before expiry (default: "7,1,0")
    /// - NOTIFIER_WEBHOOK_URL: push service base URL (default: unset, reminders kept in memory)
    pub fn from_env() -> anyhow::Result<Self> {
        let offsets = match env::var("REMINDER_OFFSETS") {
            Ok(raw) => parse_offsets(&raw).context("REMINDER_OFFSETS is invalid")?,
            Err(_) => ReminderOffset::defaults(),
        };
        let webhook_url = env::var("NOTIFIER_WEBHOOK_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            offsets,
            webhook_url,
        })
    }
}

/// Parses "7, 1, 0" keeping the given order. Rejects empty lists and negative or
/// non-numeric entries.
pub fn parse_offsets(raw: &str) -> anyhow::Result<Vec<ReminderOffset>> {
    let days = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<i64>()
                .with_context(|| format!("'{}' is not a number of days", entry))
        })
        .collect::<anyhow::Result<Vec<i64>>>()?;

    if days.is_empty() {
        bail!("at least one offset is required");
    }

    Ok(ReminderOffset::parse_all(&days)?)
}
