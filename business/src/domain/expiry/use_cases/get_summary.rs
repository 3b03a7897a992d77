use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::filter::{FailurePolicy, StatusSummary};

pub struct GetExpirySummaryParams {
    pub today: NaiveDate,
    pub policy: FailurePolicy,
}

#[async_trait]
pub trait GetExpirySummaryUseCase: Send + Sync {
    async fn execute(&self, params: GetExpirySummaryParams) -> Result<StatusSummary, ExpiryError>;
}
