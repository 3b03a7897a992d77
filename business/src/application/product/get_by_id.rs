use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Stored dates are returned as-is; classification happens on listing.
        self.logger.debug(&format!(
            "Product {} stored with expiry date '{}'",
            product.id, product.expiry_date
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::StorageUnit;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
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

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let product_id = Uuid::new_v4();
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();

        let id_clone = product_id;
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == id_clone)
            .returning(move |_| {
                Ok(Product::from_repository(
                    product_id,
                    "Halloumi".to_string(),
                    None,
                    None,
                    "2025-09-01".to_string(),
                    Some(StorageUnit::Fridges),
                    Some("Cheese".to_string()),
                    Some("5290000000011".to_string()),
                    None,
                    Some(8),
                    2,
                    now,
                    now,
                ))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, product_id);
        assert_eq!(product.name, "Halloumi");
        assert_eq!(product.unit, Some(StorageUnit::Fridges));
        assert_eq!(product.expiry_date, "2025-09-01");
        assert_eq!(product.current_quantity, Some(8));
    }

    #[tokio::test]
    async fn should_return_product_with_unreadable_expiry_date_unchanged() {
        let product_id = Uuid::new_v4();
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| {
            Ok(Product::from_repository(
                product_id,
                "Zaatar".to_string(),
                None,
                None,
                "next spring".to_string(),
                None,
                None,
                None,
                None,
                None,
                0,
                now,
                now,
            ))
        });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await
            .unwrap();

        assert_eq!(product.expiry_date, "next spring");
        assert!(product.parsed_expiry_date().is_err());
        assert_eq!(product.unit, None);
    }

    #[tokio::test]
    async fn should_wrap_database_failure_as_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::DatabaseError))
        ));
    }

    #[tokio::test]
    async fn should_return_error_when_product_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
