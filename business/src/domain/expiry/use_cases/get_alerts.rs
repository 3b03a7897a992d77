use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::filter::{FailurePolicy, ProductSelection};

pub struct GetExpiryAlertsParams {
    pub today: NaiveDate,
    pub policy: FailurePolicy,
}

/// Lists expired and soon-to-expire products, soonest first.
#[async_trait]
pub trait GetExpiryAlertsUseCase: Send + Sync {
    async fn execute(&self, params: GetExpiryAlertsParams) -> Result<ProductSelection, ExpiryError>;
}
