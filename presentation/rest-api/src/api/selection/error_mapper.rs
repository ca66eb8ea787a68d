use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::selection::errors::SelectionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SelectionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            SelectionError::GiftNameEmpty => (StatusCode::BAD_REQUEST, "ValidationError"),
            SelectionError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            SelectionError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, &self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_selection_errors_to_status_codes() {
        let cases = [
            (SelectionError::GiftNameEmpty, StatusCode::BAD_REQUEST),
            (SelectionError::NotFound, StatusCode::NOT_FOUND),
            (
                SelectionError::Repository(RepositoryError::DatabaseError),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let (status, _) = error.into_error_response();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn should_not_leak_repository_details() {
        let (_, json) =
            SelectionError::Repository(RepositoryError::CorruptedRecord).into_error_response();

        assert_eq!(json.0.message, "repository.persistence");
    }
}
