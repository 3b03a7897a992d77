use chrono::NaiveDateTime;
use poem_openapi::Object;

use business::domain::reminder::model::ReminderTrigger;

#[derive(Debug, Clone, Default, Object)]
pub struct ScheduleRemindersRequest {
    /// Days before expiry to remind at, in order. Server defaults when omitted.
    #[oai(skip_serializing_if_is_none)]
    pub offsets: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Object)]
pub struct ReminderTriggerResponse {
    pub product_id: String,
    pub offset_days: u32,
    /// Local time the reminder fires at
    pub fire_at: NaiveDateTime,
    pub title: String,
    pub body: String,
}

impl From<ReminderTrigger> for ReminderTriggerResponse {
    fn from(trigger: ReminderTrigger) -> Self {
        Self {
            product_id: trigger.product_id.to_string(),
            offset_days: trigger.offset.days(),
            fire_at: trigger.fire_at,
            title: trigger.title,
            body: trigger.body,
        }
    }
}
