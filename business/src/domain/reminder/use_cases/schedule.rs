use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::reminder::errors::ReminderError;
use crate::domain::reminder::model::{ReminderOffset, ReminderTrigger};

pub struct ScheduleRemindersParams {
    pub product_id: Uuid,
    /// Falls back to the configured offsets when `None`.
    pub offsets: Option<Vec<ReminderOffset>>,
    /// Local wall-clock evaluation time.
    pub now: NaiveDateTime,
}

#[async_trait]
pub trait ScheduleRemindersUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ScheduleRemindersParams,
    ) -> Result<Vec<ReminderTrigger>, ReminderError>;
}
