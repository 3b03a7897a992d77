use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::filter::{ProductSelection, attention_list, sort_by_expiry};
use crate::domain::expiry::use_cases::get_alerts::{GetExpiryAlertsParams, GetExpiryAlertsUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetExpiryAlertsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetExpiryAlertsUseCase for GetExpiryAlertsUseCaseImpl {
    async fn execute(&self, params: GetExpiryAlertsParams) -> Result<ProductSelection, ExpiryError> {
        self.logger
            .info(&format!("Collecting expiry alerts as of {}", params.today));

        let mut products = self.repository.get_all().await?;
        sort_by_expiry(&mut products);

        let alerts = attention_list(&products, params.today, params.policy)?;
        for id in &alerts.skipped {
            self.logger
                .warn(&format!("Skipped product {} with unreadable expiry date", id));
        }

        self.logger
            .info(&format!("{} products need attention", alerts.products.len()));
        Ok(alerts)
    }
}
