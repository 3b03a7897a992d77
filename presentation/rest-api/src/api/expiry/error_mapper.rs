use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::expiry::errors::ExpiryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ExpiryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ExpiryError::InvalidDate(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "expiry.invalid_date",
            ),
            // Only reachable in strict mode: a stored product carries an unreadable date.
            ExpiryError::InvalidProductDate { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DataError",
                "expiry.invalid_product_date",
            ),
            ExpiryError::Repository(_) => (
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
