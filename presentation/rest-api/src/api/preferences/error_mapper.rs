use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::preferences::errors::PreferencesError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PreferencesError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            PreferencesError::InvalidBudget => (StatusCode::BAD_REQUEST, "ValidationError"),
            PreferencesError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            PreferencesError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
