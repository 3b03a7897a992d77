use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::reminder::errors::ReminderError;
use crate::domain::reminder::services::NotificationDeliveryService;
use crate::domain::reminder::use_cases::cancel::{CancelRemindersParams, CancelRemindersUseCase};

/// Withdraws reminders for a product.
///
/// No product-to-trigger index is kept, so this cancels every reminder the
/// application has scheduled, not only the ones for `product_id`.
pub struct CancelRemindersUseCaseImpl {
    pub notifier: Arc<dyn NotificationDeliveryService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CancelRemindersUseCase for CancelRemindersUseCaseImpl {
    async fn execute(&self, params: CancelRemindersParams) -> Result<(), ReminderError> {
        self.logger.info(&format!(
            "Cancelling all scheduled reminders (requested for product {})",
            params.product_id
        ));

        if let Err(e) = self.notifier.cancel_all().await {
            self.logger
                .warn(&format!("Reminder cancellation was not handed over: {}", e));
        }

        Ok(())
    }
}
