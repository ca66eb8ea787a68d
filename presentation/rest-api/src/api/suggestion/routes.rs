use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::suggestion::use_cases::generate::{
    GenerateSuggestionsParams, GenerateSuggestionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{SuggestionRequestDto, SuggestionResponse};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    generate_use_case: Arc<dyn GenerateSuggestionsUseCase>,
}

impl SuggestionApi {
    pub fn new(generate_use_case: Arc<dyn GenerateSuggestionsUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Gift suggestions
#[OpenApi]
impl SuggestionApi {
    /// Suggest gifts
    ///
    /// Returns up to six gifts within the budget, best match first. Never
    /// returns an empty list: when nothing fits, a gift card priced at the
    /// budget is suggested.
    #[oai(path = "/suggestions", method = "post", tag = "ApiTags::Suggestions")]
    async fn suggest(&self, body: Json<SuggestionRequestDto>) -> SuggestGiftsResponse {
        let params = GenerateSuggestionsParams {
            interests: body.0.interests,
            budget: body.0.budget,
            occasion: body.0.occasion,
        };

        match self.generate_use_case.execute(params).await {
            Ok(suggestions) => {
                let responses: Vec<SuggestionResponse> =
                    suggestions.into_iter().map(|s| s.into()).collect();
                SuggestGiftsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SuggestGiftsResponse::BadRequest(json),
                    _ => SuggestGiftsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestGiftsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SuggestionResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
