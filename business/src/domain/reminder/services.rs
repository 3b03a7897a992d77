use async_trait::async_trait;

use super::model::ReminderTrigger;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("notifier.delivery_failed")]
    DeliveryFailed,
    #[error("notifier.unavailable")]
    Unavailable,
}

/// Port to whatever actually delivers notifications (push service, webhook, device).
///
/// Delivery owns OS-level scheduling and permissions. Callers hand triggers
/// over and do not wait for the notification to be shown.
#[async_trait]
pub trait NotificationDeliveryService: Send + Sync {
    async fn schedule(&self, trigger: &ReminderTrigger) -> Result<(), DeliveryError>;

    /// Withdraws every trigger this application has scheduled.
    async fn cancel_all(&self) -> Result<(), DeliveryError>;
}
