use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::reminder::errors::ReminderError;
use crate::domain::reminder::model::{ReminderOffset, ReminderTrigger};
use crate::domain::reminder::scheduler::compute_product_triggers;
use crate::domain::reminder::services::NotificationDeliveryService;
use crate::domain::reminder::use_cases::schedule::{
    ScheduleRemindersParams, ScheduleRemindersUseCase,
};

pub struct ScheduleRemindersUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub notifier: Arc<dyn NotificationDeliveryService>,
    pub default_offsets: Vec<ReminderOffset>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScheduleRemindersUseCase for ScheduleRemindersUseCaseImpl {
    async fn execute(
        &self,
        params: ScheduleRemindersParams,
    ) -> Result<Vec<ReminderTrigger>, ReminderError> {
        self.logger.info(&format!(
            "Scheduling reminders for product {}",
            params.product_id
        ));

        let product = self
            .repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReminderError::ProductNotFound,
                other => ReminderError::Repository(other),
            })?;

        let offsets = params
            .offsets
            .as_deref()
            .unwrap_or(self.default_offsets.as_slice());
        let triggers = compute_product_triggers(&product, offsets, params.now)?;

        // Delivery failures are the notifier's concern; keep handing over the rest.
        for trigger in &triggers {
            if let Err(e) = self.notifier.schedule(trigger).await {
                self.logger.warn(&format!(
                    "Reminder for product {} at {} was not handed over: {}",
                    trigger.product_id, trigger.fire_at, e
                ));
            }
        }

        self.logger.info(&format!(
            "Scheduled {} of {} reminders for product {}",
            triggers.len(),
            offsets.len(),
            product.id
        ));
        Ok(triggers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::StorageUnit;
    use crate::domain::reminder::services::DeliveryError;
    use chrono::{NaiveDate, NaiveDateTime, Utc};
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
        pub Notifier {}

        #[async_trait]
        impl NotificationDeliveryService for Notifier {
            async fn schedule(&self, trigger: &ReminderTrigger) -> Result<(), DeliveryError>;
            async fn cancel_all(&self) -> Result<(), DeliveryError>;
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

    fn make_product(id: Uuid, expiry_date: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            "Milk".to_string(),
            None,
            None,
            expiry_date.to_string(),
            Some(StorageUnit::Fridges),
            None,
            None,
            None,
            None,
            0,
            now,
            now,
        )
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn repo_returning(product: Product) -> MockProductRepo {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(product.clone()));
        mock_repo
    }

    #[tokio::test]
    async fn should_hand_future_triggers_to_notifier_with_default_offsets() {
        let product_id = Uuid::new_v4();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_schedule()
            .withf(move |trigger| trigger.product_id == product_id)
            .times(2)
            .returning(|_| Ok(()));

        let use_case = ScheduleRemindersUseCaseImpl {
            repository: Arc::new(repo_returning(make_product(product_id, "2025-06-15"))),
            notifier: Arc::new(notifier),
            default_offsets: ReminderOffset::defaults(),
            logger: mock_logger(),
        };

        let triggers = use_case
            .execute(ScheduleRemindersParams {
                product_id,
                offsets: None,
                now: now(),
            })
            .await
            .unwrap();

        let days: Vec<u32> = triggers.iter().map(|t| t.offset.days()).collect();
        assert_eq!(days, vec![1, 0]);
    }

    #[tokio::test]
    async fn should_use_requested_offsets_when_given() {
        let product_id = Uuid::new_v4();
        let mut notifier = MockNotifier::new();
        notifier.expect_schedule().times(1).returning(|_| Ok(()));

        let use_case = ScheduleRemindersUseCaseImpl {
            repository: Arc::new(repo_returning(make_product(product_id, "2025-06-15"))),
            notifier: Arc::new(notifier),
            default_offsets: ReminderOffset::defaults(),
            logger: mock_logger(),
        };

        let triggers = use_case
            .execute(ScheduleRemindersParams {
                product_id,
                offsets: Some(vec![ReminderOffset::from(3)]),
                now: now(),
            })
            .await
            .unwrap();

        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].body, "Milk: 3 days remaining");
    }

    #[tokio::test]
    async fn should_return_triggers_when_delivery_fails() {
        let product_id = Uuid::new_v4();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_schedule()
            .times(2)
            .returning(|_| Err(DeliveryError::Unavailable));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().times(2).returning(|_| ());

        let use_case = ScheduleRemindersUseCaseImpl {
            repository: Arc::new(repo_returning(make_product(product_id, "2025-06-15"))),
            notifier: Arc::new(notifier),
            default_offsets: ReminderOffset::defaults(),
            logger: Arc::new(logger),
        };

        let triggers = use_case
            .execute(ScheduleRemindersParams {
                product_id,
                offsets: None,
                now: now(),
            })
            .await
            .unwrap();

        assert_eq!(triggers.len(), 2);
    }

    #[tokio::test]
    async fn should_fail_closed_when_expiry_date_is_malformed() {
        let product_id = Uuid::new_v4();
        let mut notifier = MockNotifier::new();
        notifier.expect_schedule().never();

        let use_case = ScheduleRemindersUseCaseImpl {
            repository: Arc::new(repo_returning(make_product(product_id, "2025-6-xx"))),
            notifier: Arc::new(notifier),
            default_offsets: ReminderOffset::defaults(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ScheduleRemindersParams {
                product_id,
                offsets: None,
                now: now(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReminderError::InvalidDate(_)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = ScheduleRemindersUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: Arc::new(MockNotifier::new()),
            default_offsets: ReminderOffset::defaults(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ScheduleRemindersParams {
                product_id: Uuid::new_v4(),
                offsets: None,
                now: now(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReminderError::ProductNotFound));
    }
}
