use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::StorageUnit;

pub struct CreateProductParams {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub expiry_date: String,
    pub unit: StorageUnit,
    pub category: Option<String>,
    pub barcode: Option<String>,
    pub location: Option<String>,
    pub current_quantity: Option<u32>,
    pub minimum_quantity: u32,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
