use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
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

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::StorageUnit;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: uuid::Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: uuid::Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(name: &str, expiry_date: &str) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            description: None,
            image_url: Some("products/labneh.jpg".to_string()),
            expiry_date: expiry_date.to_string(),
            unit: StorageUnit::Fridges,
            category: Some("Dairy".to_string()),
            barcode: None,
            location: Some("Aisle 3".to_string()),
            current_quantity: Some(24),
            minimum_quantity: 0,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(|product| product.name == "Labneh" && product.expiry_date == "2025-06-15")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Labneh", "2025-06-15")).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.name, "Labneh");
        assert_eq!(product.unit, Some(StorageUnit::Fridges));
        assert_eq!(product.current_quantity, Some(24));
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", "2025-06-15")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_product_when_expiry_date_is_invalid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Labneh", "2025-06-32")).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidExpiryDate));
    }

    #[tokio::test]
    async fn should_propagate_repository_error_when_save_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Labneh", "2025-06-15")).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
