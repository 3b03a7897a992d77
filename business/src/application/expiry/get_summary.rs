use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::filter::{StatusSummary, count_by_status};
use crate::domain::expiry::use_cases::get_summary::{
    GetExpirySummaryParams, GetExpirySummaryUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetExpirySummaryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetExpirySummaryUseCase for GetExpirySummaryUseCaseImpl {
    async fn execute(&self, params: GetExpirySummaryParams) -> Result<StatusSummary, ExpiryError> {
        let products = self.repository.get_all().await?;
        let summary = count_by_status(&products, params.today, params.policy)?;

        if !summary.skipped.is_empty() {
            self.logger.warn(&format!(
                "{} products left out of the summary: {:?}",
                summary.skipped.len(),
                summary.skipped
            ));
        }

        self.logger.debug(&format!(
            "Summary as of {}: {} expired, {} expiring soon",
            params.today, summary.expired, summary.expiring_soon
        ));
        Ok(summary)
    }
}
