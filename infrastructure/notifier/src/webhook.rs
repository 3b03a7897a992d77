use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use tokio::runtime::Handle;
use uuid::Uuid;

use business::domain::reminder::model::ReminderTrigger;
use business::domain::reminder::services::{DeliveryError, NotificationDeliveryService};

use crate::client::WebhookClient;

/// Body posted for every scheduled reminder.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPayload {
    pub product_id: Uuid,
    pub offset_days: u32,
    pub fire_at: NaiveDateTime,
    pub title: String,
    pub body: String,
}

impl From<&ReminderTrigger> for ReminderPayload {
    fn from(trigger: &ReminderTrigger) -> Self {
        Self {
            product_id: trigger.product_id,
            offset_days: trigger.offset.days(),
            fire_at: trigger.fire_at,
            title: trigger.title.clone(),
            body: trigger.body.clone(),
        }
    }
}

/// Hands reminders to an external push service over HTTP.
///
/// Scheduling is fire-and-forget: the request runs on a spawned task and
/// its outcome is only logged. Cancellation is awaited.
pub struct WebhookNotifier {
    client: WebhookClient,
}

impl WebhookNotifier {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationDeliveryService for WebhookNotifier {
    async fn schedule(&self, trigger: &ReminderTrigger) -> Result<(), DeliveryError> {
        let handle = Handle::try_current().map_err(|_| DeliveryError::Unavailable)?;

        let payload = ReminderPayload::from(trigger);
        let request = self
            .client
            .client
            .post(self.client.reminders_url())
            .header("Content-Type", "application/json")
            .json(&payload);

        handle.spawn(async move {
            match request.send().await {
                Ok(resp) if resp.status().is_success() => {
                    tracing::debug!(
                        "Reminder for product {} at {} delivered",
                        payload.product_id,
                        payload.fire_at
                    );
                }
                Ok(resp) => {
                    tracing::warn!(
                        "Push service rejected reminder for product {}: {}",
                        payload.product_id,
                        resp.status()
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Push service unreachable for product {}: {}",
                        payload.product_id,
                        e
                    );
                }
            }
        });

        Ok(())
    }

    async fn cancel_all(&self) -> Result<(), DeliveryError> {
        let response = self
            .client
            .client
            .delete(self.client.reminders_url())
            .send()
            .await
            .map_err(|_| DeliveryError::Unavailable)?;

        if !response.status().is_success() {
            return Err(DeliveryError::DeliveryFailed);
        }
        Ok(())
    }
}
