use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::reminder::errors::ReminderError;

pub struct CancelRemindersParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait CancelRemindersUseCase: Send + Sync {
    async fn execute(&self, params: CancelRemindersParams) -> Result<(), ReminderError>;
}
