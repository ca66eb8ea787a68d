use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            SuggestionError::InvalidBudget
            | SuggestionError::NoInterestsSelected
            | SuggestionError::NoOccasionSelected => (StatusCode::BAD_REQUEST, "ValidationError"),
            SuggestionError::EmptyResult => (StatusCode::INTERNAL_SERVER_ERROR, "SuggestionError"),
            SuggestionError::CatalogueUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}
