use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::expiry::errors::ExpiryError;
use crate::domain::expiry::filter::{ProductSelection, filter_products, sort_by_expiry};
use crate::domain::expiry::use_cases::list_products::{ListProductsParams, ListProductsUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductSelection, ExpiryError> {
        self.logger.info(&format!(
            "Listing products (lifecycle: {}, unit: {}, search: {:?}) as of {}",
            params.filter.lifecycle,
            params
                .filter
                .unit
                .map_or("any".to_string(), |unit| unit.to_string()),
            params.filter.search,
            params.today
        ));

        let mut products = self.repository.get_all().await?;
        sort_by_expiry(&mut products);

        let selection = filter_products(&products, &params.filter, params.today, params.policy)
            .inspect_err(|e| self.logger.error(&format!("Product listing aborted: {:?}", e)))?;

        for id in &selection.skipped {
            self.logger
                .warn(&format!("Skipped product {} with unreadable expiry date", id));
        }

        self.logger.info(&format!(
            "Selected {} of {} products",
            selection.products.len(),
            products.len()
        ));
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::expiry::classifier::ExpiryLevel;
    use crate::domain::expiry::filter::{FailurePolicy, Lifecycle, ProductFilter};
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::StorageUnit;
    use chrono::{NaiveDate, Utc};
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

    fn make_product(name: &str, expiry_date: &str, unit: StorageUnit) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            None,
            None,
            expiry_date.to_string(),
            Some(unit),
            None,
            None,
            None,
            None,
            0,
            now,
            now,
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn repo_with_stock() -> MockProductRepo {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                make_product("Rice", "2026-01-01", StorageUnit::Warehouse),
                make_product("Yoghurt", "2025-06-10", StorageUnit::Fridges),
                make_product("Chips", "2025-06-30", StorageUnit::Snacks),
                make_product("Mystery", "tomorrow", StorageUnit::Shelves),
            ])
        });
        mock_repo
    }

    #[tokio::test]
    async fn should_return_unexpired_products_sorted_when_no_criteria() {
        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(repo_with_stock()),
            logger: mock_logger(),
        };

        let selection = use_case
            .execute(ListProductsParams {
                filter: ProductFilter::default(),
                today: today(),
                policy: FailurePolicy::SkipAndContinue,
            })
            .await
            .unwrap();

        let names: Vec<&str> = selection
            .products
            .iter()
            .map(|p| p.product.name.as_str())
            .collect();
        assert_eq!(names, vec!["Chips", "Rice"]);
        assert_eq!(selection.products[0].status.level, ExpiryLevel::ExpiringSoon);
        assert_eq!(selection.products[0].status.days_remaining, 15);
        assert_eq!(selection.skipped.len(), 1);
    }

    #[tokio::test]
    async fn should_filter_by_unit_and_lifecycle() {
        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(repo_with_stock()),
            logger: mock_logger(),
        };

        let selection = use_case
            .execute(ListProductsParams {
                filter: ProductFilter {
                    lifecycle: Lifecycle::Expired,
                    unit: Some(StorageUnit::Fridges),
                    search: None,
                },
                today: today(),
                policy: FailurePolicy::SkipAndContinue,
            })
            .await
            .unwrap();

        assert_eq!(selection.products.len(), 1);
        assert_eq!(selection.products[0].product.name, "Yoghurt");
    }

    #[tokio::test]
    async fn should_fail_when_fail_fast_and_date_is_malformed() {
        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(repo_with_stock()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListProductsParams {
                filter: ProductFilter::default(),
                today: today(),
                policy: FailurePolicy::FailFast,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ExpiryError::InvalidProductDate { value, .. } if value == "tomorrow"
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListProductsParams {
                filter: ProductFilter::default(),
                today: today(),
                policy: FailurePolicy::SkipAndContinue,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ExpiryError::Repository(_)));
    }
}
