use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ExpiryError;
use crate::domain::product::model::Product;

/// Upper bound (inclusive) of the "expiring soon" band, in days.
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Expiry levels a product can be in at a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryLevel {
    /// More than 30 days left.
    Good,
    /// Between 0 and 30 days left, both inclusive.
    ExpiringSoon,
    /// Expiry date is in the past.
    Expired,
}

impl ExpiryLevel {
    pub fn from_days_remaining(days: i64) -> Self {
        match days {
            d if d < 0 => ExpiryLevel::Expired,
            0..=EXPIRING_SOON_DAYS => ExpiryLevel::ExpiringSoon,
            _ => ExpiryLevel::Good,
        }
    }
}

impl std::fmt::Display for ExpiryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryLevel::Good => write!(f, "good"),
            ExpiryLevel::ExpiringSoon => write!(f, "expiring_soon"),
            ExpiryLevel::Expired => write!(f, "expired"),
        }
    }
}

/// Derived status of a single expiry date. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryStatus {
    pub level: ExpiryLevel,
    /// Signed whole calendar days until expiry; negative once expired.
    pub days_remaining: i64,
}

impl ExpiryStatus {
    pub fn is_expired(&self) -> bool {
        self.level == ExpiryLevel::Expired
    }

    pub fn is_expiring_soon(&self) -> bool {
        self.level == ExpiryLevel::ExpiringSoon
    }
}

/// Parses a stored expiry date.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time component which is
/// ignored (`2025-06-15T00:00:00Z`). Impossible dates such as `2025-02-30`
/// are rejected.
pub fn parse_expiry_date(raw: &str) -> Result<NaiveDate, ExpiryError> {
    let trimmed = raw.trim();
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| ExpiryError::InvalidDate(raw.to_string()))
}

/// Whole calendar days from `today` until `expiry`.
///
/// Both sides are dates, so the result is the midnight-to-midnight difference
/// and never depends on the time of day.
pub fn days_remaining(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

pub fn classify(expiry: NaiveDate, today: NaiveDate) -> ExpiryStatus {
    let days_remaining = days_remaining(expiry, today);
    ExpiryStatus {
        level: ExpiryLevel::from_days_remaining(days_remaining),
        days_remaining,
    }
}

/// Classifies a product's stored expiry date. Fails closed on a malformed date.
pub fn classify_product(product: &Product, today: NaiveDate) -> Result<ExpiryStatus, ExpiryError> {
    let expiry = product.parsed_expiry_date()?;
    Ok(classify(expiry, today))
}
