use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::filter::{FailurePolicy, ProductFilter, ProductSelection};

pub struct ListProductsParams {
    pub filter: ProductFilter,
    pub today: NaiveDate,
    pub policy: FailurePolicy,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductSelection, ExpiryError>;
}
