use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use super::errors::ReminderError;
use super::model::{REMINDER_HOUR, ReminderOffset, ReminderTrigger};
use crate::domain::product::model::Product;

fn reminder_time() -> NaiveTime {
    NaiveTime::from_hms_opt(REMINDER_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Computes the reminders still ahead of `now` for one expiry date.
///
/// Each offset fires at 09:00 local time, `offset` days before `expiry`.
/// Triggers at or before `now` are dropped, never fired late. Output follows
/// the order of `offsets`.
pub fn compute_triggers(
    product_id: Uuid,
    product_name: &str,
    expiry: NaiveDate,
    offsets: &[ReminderOffset],
    now: NaiveDateTime,
) -> Vec<ReminderTrigger> {
    let expiry_at = expiry.and_time(reminder_time());

    offsets
        .iter()
        .filter_map(|offset| {
            let fire_at = expiry_at.checked_sub_days(Days::new(offset.days().into()))?;
            (fire_at > now).then(|| ReminderTrigger::new(product_id, product_name, *offset, fire_at))
        })
        .collect()
}

/// Same as [`compute_triggers`], reading the stored expiry date of `product`.
pub fn compute_product_triggers(
    product: &Product,
    offsets: &[ReminderOffset],
    now: NaiveDateTime,
) -> Result<Vec<ReminderTrigger>, ReminderError> {
    let expiry = product
        .parsed_expiry_date()
        .map_err(|_| ReminderError::InvalidDate(product.expiry_date.clone()))?;

    Ok(compute_triggers(
        product.id,
        &product.name,
        expiry,
        offsets,
        now,
    ))
}
