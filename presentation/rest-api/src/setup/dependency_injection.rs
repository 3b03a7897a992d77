use std::sync::Arc;

use logger::TracingLogger;
use notifier::client::WebhookClient;
use notifier::in_memory::InMemoryNotifier;
use notifier::webhook::WebhookNotifier;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::expiry::get_alerts::GetExpiryAlertsUseCaseImpl;
use business::application::expiry::get_summary::GetExpirySummaryUseCaseImpl;
use business::application::expiry::list_products::ListProductsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::reminder::cancel::CancelRemindersUseCaseImpl;
use business::application::reminder::schedule::ScheduleRemindersUseCaseImpl;
use business::domain::reminder::services::NotificationDeliveryService;

use crate::api::expiry::routes::AlertApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::reminder::routes::ReminderApi;
use crate::config::reminder_config::ReminderConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub alert_api: AlertApi,
    pub reminder_api: ReminderApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, reminders: ReminderConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let notifier: Arc<dyn NotificationDeliveryService> = match reminders.webhook_url {
            Some(url) => {
                tracing::info!("Reminders delivered through webhook at {}", url);
                Arc::new(WebhookNotifier::new(WebhookClient::new(url)))
            }
            None => {
                tracing::warn!("NOTIFIER_WEBHOOK_URL not set, reminders are kept in memory only");
                Arc::new(InMemoryNotifier::new())
            }
        };

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Expiry view use cases
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let summary_use_case = Arc::new(GetExpirySummaryUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let alerts_use_case = Arc::new(GetExpiryAlertsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Reminder use cases
        let schedule_use_case = Arc::new(ScheduleRemindersUseCaseImpl {
            repository: product_repository,
            notifier: notifier.clone(),
            default_offsets: reminders.offsets,
            logger: logger.clone(),
        });
        let cancel_use_case = Arc::new(CancelRemindersUseCaseImpl { notifier, logger });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            list_use_case,
            summary_use_case,
        );

        Ok(Self {
            health_api: HealthApi,
            product_api,
            alert_api: AlertApi::new(alerts_use_case),
            reminder_api: ReminderApi::new(schedule_use_case, cancel_use_case),
        })
    }
}
