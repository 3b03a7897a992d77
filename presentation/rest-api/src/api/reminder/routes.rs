use std::sync::Arc;

use chrono::Local;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::reminder::model::ReminderOffset;
use business::domain::reminder::use_cases::cancel::{CancelRemindersParams, CancelRemindersUseCase};
use business::domain::reminder::use_cases::schedule::{
    ScheduleRemindersParams, ScheduleRemindersUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::reminder::dto::{ReminderTriggerResponse, ScheduleRemindersRequest};
use crate::api::tags::ApiTags;

pub struct ReminderApi {
    schedule_use_case: Arc<dyn ScheduleRemindersUseCase>,
    cancel_use_case: Arc<dyn CancelRemindersUseCase>,
}

impl ReminderApi {
    pub fn new(
        schedule_use_case: Arc<dyn ScheduleRemindersUseCase>,
        cancel_use_case: Arc<dyn CancelRemindersUseCase>,
    ) -> Self {
        Self {
            schedule_use_case,
            cancel_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation("product.invalid_id"))
}

/// Expiry reminder API
#[OpenApi]
impl ReminderApi {
    /// Schedule expiry reminders for a product
    ///
    /// Reminders fire at 09:00 local time the given number of days before
    /// expiry. Offsets whose time has already passed are dropped. Returns the
    /// reminders that were handed to the notifier.
    #[oai(
        path = "/products/:id/reminders",
        method = "post",
        tag = "ApiTags::Reminders"
    )]
    async fn schedule_reminders(
        &self,
        id: Path<String>,
        body: Json<ScheduleRemindersRequest>,
    ) -> ScheduleRemindersResponse {
        let product_id = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return ScheduleRemindersResponse::BadRequest(json),
        };

        let offsets = match body.0.offsets.as_deref().map(ReminderOffset::parse_all) {
            Some(Err(err)) => {
                let (_status, json) = err.into_error_response();
                return ScheduleRemindersResponse::BadRequest(json);
            }
            Some(Ok(offsets)) => Some(offsets),
            None => None,
        };

        let params = ScheduleRemindersParams {
            product_id,
            offsets,
            now: Local::now().naive_local(),
        };

        match self.schedule_use_case.execute(params).await {
            Ok(triggers) => ScheduleRemindersResponse::Created(Json(
                triggers.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ScheduleRemindersResponse::BadRequest(json),
                    404 => ScheduleRemindersResponse::NotFound(json),
                    422 => ScheduleRemindersResponse::UnprocessableEntity(json),
                    _ => ScheduleRemindersResponse::InternalError(json),
                }
            }
        }
    }

    /// Cancel reminders
    ///
    /// The notifier keeps no per-product index, so this withdraws every
    /// scheduled reminder, not only this product's.
    #[oai(
        path = "/products/:id/reminders",
        method = "delete",
        tag = "ApiTags::Reminders"
    )]
    async fn cancel_reminders(&self, id: Path<String>) -> CancelRemindersResponse {
        let product_id = match parse_id(&id.0) {
            Ok(uuid) => uuid,
            Err(json) => return CancelRemindersResponse::BadRequest(json),
        };

        match self
            .cancel_use_case
            .execute(CancelRemindersParams { product_id })
            .await
        {
            Ok(()) => CancelRemindersResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CancelRemindersResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScheduleRemindersResponse {
    #[oai(status = 201)]
    Created(Json<Vec<ReminderTriggerResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CancelRemindersResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::reminder::errors::ReminderError;
    use business::domain::reminder::model::ReminderTrigger;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSchedule {
        requested: Mutex<Vec<Option<Vec<u32>>>>,
    }

    #[async_trait]
    impl ScheduleRemindersUseCase for RecordingSchedule {
        async fn execute(
            &self,
            params: ScheduleRemindersParams,
        ) -> Result<Vec<ReminderTrigger>, ReminderError> {
            let days = params
                .offsets
                .as_ref()
                .map(|offsets| offsets.iter().map(|o| o.days()).collect());
            self.requested.lock().unwrap().push(days);
            Ok(Vec::new())
        }
    }

    struct NoopCancel;

    #[async_trait]
    impl CancelRemindersUseCase for NoopCancel {
        async fn execute(&self, _params: CancelRemindersParams) -> Result<(), ReminderError> {
            Ok(())
        }
    }

    fn client(schedule: Arc<RecordingSchedule>) -> TestClient<Route> {
        let api = ReminderApi::new(schedule, Arc::new(NoopCancel));
        let service = OpenApiService::new(api, "test", "0.1.0");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_pass_requested_offsets_in_order() {
        let schedule = Arc::new(RecordingSchedule::default());
        let path = format!("/products/{}/reminders", Uuid::new_v4());

        let resp = client(schedule.clone())
            .post(path)
            .body_json(&json!({ "offsets": [3, 0] }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        assert_eq!(*schedule.requested.lock().unwrap(), vec![Some(vec![3, 0])]);
    }

    #[tokio::test]
    async fn should_use_server_defaults_when_offsets_are_omitted() {
        let schedule = Arc::new(RecordingSchedule::default());
        let path = format!("/products/{}/reminders", Uuid::new_v4());

        let resp = client(schedule.clone())
            .post(path)
            .body_json(&json!({}))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        assert_eq!(*schedule.requested.lock().unwrap(), vec![None]);
    }

    #[tokio::test]
    async fn should_reject_negative_offset_before_scheduling() {
        let schedule = Arc::new(RecordingSchedule::default());
        let path = format!("/products/{}/reminders", Uuid::new_v4());

        let resp = client(schedule.clone())
            .post(path)
            .body_json(&json!({ "offsets": [7, -1] }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert!(schedule.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_no_content_when_cancelling() {
        let path = format!("/products/{}/reminders", Uuid::new_v4());

        let resp = client(Arc::new(RecordingSchedule::default()))
            .delete(path)
            .send()
            .await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }
}
