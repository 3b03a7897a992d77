use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};

use business::domain::reminder::model::ReminderTrigger;
use business::domain::reminder::services::{DeliveryError, NotificationDeliveryService};

/// Keeps handed-over reminders in process. Used when no push service is configured.
///
/// A reminder is held only until its fire time. Once due it is logged at info and released.
#[derive(Default)]
pub struct InMemoryNotifier {
    scheduled: Mutex<Vec<ReminderTrigger>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the pending reminders in hand-over order.
    pub fn scheduled(&self) -> Vec<ReminderTrigger> {
        match self.scheduled.lock() {
            Ok(mut pending) => {
                release_due(&mut pending, now());
                pending.clone()
            }
            Err(_) => Vec::new(),
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn announce(trigger: &ReminderTrigger) {
    tracing::info!(
        "Reminder due for product {}: {} ({})",
        trigger.product_id,
        trigger.title,
        trigger.body
    );
}

/// Drops every reminder whose fire time is at or before `now`.
fn release_due(pending: &mut Vec<ReminderTrigger>, now: NaiveDateTime) {
    pending.retain(|trigger| {
        let due = trigger.fire_at <= now;
        if due {
            announce(trigger);
        }
        !due
    });
}

#[async_trait]
impl NotificationDeliveryService for InMemoryNotifier {
    async fn schedule(&self, trigger: &ReminderTrigger) -> Result<(), DeliveryError> {
        let mut pending = self
            .scheduled
            .lock()
            .map_err(|_| DeliveryError::Unavailable)?;

        let now = now();
        release_due(&mut pending, now);

        if trigger.fire_at <= now {
            announce(trigger);
            return Ok(());
        }

        pending.push(trigger.clone());
        tracing::debug!(
            "Reminder for product {} held until {}",
            trigger.product_id,
            trigger.fire_at
        );
        Ok(())
    }

    async fn cancel_all(&self) -> Result<(), DeliveryError> {
        let mut pending = self
            .scheduled
            .lock()
            .map_err(|_| DeliveryError::Unavailable)?;
        pending.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::reminder::model::ReminderOffset;
    use chrono::{Duration, NaiveDate};
    use uuid::Uuid;

    fn trigger_at(offset: u32, fire_at: NaiveDateTime) -> ReminderTrigger {
        ReminderTrigger::new(Uuid::new_v4(), "Cheese", ReminderOffset::from(offset), fire_at)
    }

    fn upcoming(offset: u32) -> ReminderTrigger {
        trigger_at(offset, now() + Duration::days(30))
    }

    fn long_past() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn should_keep_triggers_in_hand_over_order() {
        let notifier = InMemoryNotifier::new();
        let first = upcoming(7);
        let second = upcoming(0);

        notifier.schedule(&first).await.unwrap();
        notifier.schedule(&second).await.unwrap();

        assert_eq!(notifier.scheduled(), vec![first, second]);
    }

    #[tokio::test]
    async fn should_drop_everything_on_cancel_all() {
        let notifier = InMemoryNotifier::new();
        notifier.schedule(&upcoming(1)).await.unwrap();

        notifier.cancel_all().await.unwrap();

        assert!(notifier.scheduled().is_empty());
    }

    #[tokio::test]
    async fn should_not_hold_triggers_when_fire_time_has_passed() {
        let notifier = InMemoryNotifier::new();
        let kept = upcoming(1);

        for _ in 0..10_000 {
            notifier.schedule(&trigger_at(0, long_past())).await.unwrap();
        }
        notifier.schedule(&kept).await.unwrap();

        assert_eq!(notifier.scheduled(), vec![kept]);
    }

    #[test]
    fn should_release_held_trigger_when_its_time_arrives() {
        let fire_at = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let later = trigger_at(0, fire_at + Duration::days(1));
        let mut pending = vec![trigger_at(7, fire_at), later.clone()];

        release_due(&mut pending, fire_at - Duration::minutes(1));
        assert_eq!(pending.len(), 2);

        release_due(&mut pending, fire_at);
        assert_eq!(pending, vec![later]);
    }
}
