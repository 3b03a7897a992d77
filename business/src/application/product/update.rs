use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated_product = existing.apply(NewProductProps {
            name: params.name,
            description: params.description,
            image_url: params.image_url,
            expiry_date: params.expiry_date,
            unit: params.unit,
            category: params.category,
            barcode: params.barcode,
            location: params.location,
            current_quantity: params.current_quantity,
            minimum_quantity: params.minimum_quantity,
        })?;

        self.repository.save(&updated_product).await?;

        if existing.expiry_date != updated_product.expiry_date {
            self.logger.info(&format!(
                "Expiry date of product {} moved from {} to {}",
                updated_product.id, existing.expiry_date, updated_product.expiry_date
            ));
        }

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
