use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::reminder::errors::ReminderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReminderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ReminderError::InvalidOffset(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "reminder.invalid_offset",
            ),
            ReminderError::InvalidDate(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DataError",
                "reminder.invalid_date",
            ),
            ReminderError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "reminder.product_not_found",
            ),
            ReminderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
