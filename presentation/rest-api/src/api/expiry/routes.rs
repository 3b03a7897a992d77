use std::sync::Arc;

use chrono::Local;
use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::expiry::filter::FailurePolicy;
use business::domain::expiry::use_cases::get_alerts::{
    GetExpiryAlertsParams, GetExpiryAlertsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::expiry::dto::ProductListResponse;
use crate::api::tags::ApiTags;

pub struct AlertApi {
    get_alerts_use_case: Arc<dyn GetExpiryAlertsUseCase>,
}

impl AlertApi {
    pub fn new(get_alerts_use_case: Arc<dyn GetExpiryAlertsUseCase>) -> Self {
        Self {
            get_alerts_use_case,
        }
    }
}

/// `strict=true` turns an unreadable stored date into a request failure.
pub fn failure_policy(strict: Option<bool>) -> FailurePolicy {
    if strict.unwrap_or(false) {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::SkipAndContinue
    }
}

#[OpenApi]
impl AlertApi {
    /// Products that need attention
    ///
    /// Expired products and products expiring within 30 days, soonest first.
    /// With `strict=true` an unreadable expiry date fails the request instead
    /// of being reported in `skipped`.
    #[oai(path = "/alerts", method = "get", tag = "ApiTags::Alerts")]
    async fn get_alerts(&self, strict: Query<Option<bool>>) -> GetAlertsResponse {
        let params = GetExpiryAlertsParams {
            today: Local::now().date_naive(),
            policy: failure_policy(strict.0),
        };

        match self.get_alerts_use_case.execute(params).await {
            Ok(alerts) => GetAlertsResponse::Ok(Json(alerts.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetAlertsResponse::UnprocessableEntity(json),
                    _ => GetAlertsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAlertsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
