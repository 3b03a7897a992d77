use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ReminderError;

/// One week before, one day before and on the day.
pub const DEFAULT_REMINDER_OFFSETS: [u32; 3] = [7, 1, 0];

/// Local hour of day at which reminders fire.
pub const REMINDER_HOUR: u32 = 9;

/// Days before expiry at which a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderOffset(u32);

impl ReminderOffset {
    pub fn new(days: i64) -> Result<Self, ReminderError> {
        u32::try_from(days)
            .map(Self)
            .map_err(|_| ReminderError::InvalidOffset(days))
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    pub fn defaults() -> Vec<ReminderOffset> {
        DEFAULT_REMINDER_OFFSETS.into_iter().map(Self).collect()
    }

    /// Validates every offset, keeping input order.
    pub fn parse_all(days: &[i64]) -> Result<Vec<ReminderOffset>, ReminderError> {
        days.iter().map(|d| Self::new(*d)).collect()
    }
}

impl From<u32> for ReminderOffset {
    fn from(days: u32) -> Self {
        Self(days)
    }
}

/// A concrete reminder handed to the delivery service. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTrigger {
    pub product_id: Uuid,
    pub offset: ReminderOffset,
    /// Local wall-clock instant.
    pub fire_at: NaiveDateTime,
    pub title: String,
    pub body: String,
}

impl ReminderTrigger {
    pub fn new(
        product_id: Uuid,
        product_name: &str,
        offset: ReminderOffset,
        fire_at: NaiveDateTime,
    ) -> Self {
        let (title, body) = match offset.days() {
            0 => (
                "Product expired".to_string(),
                format!("{}: expired today", product_name),
            ),
            1 => (
                "Product expiry reminder".to_string(),
                format!("{}: 1 day remaining", product_name),
            ),
            days => (
                "Product expiry reminder".to_string(),
                format!("{}: {} days remaining", product_name, days),
            ),
        };

        Self {
            product_id,
            offset,
            fire_at,
            title,
            body,
        }
    }
}
