use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::preferences::use_cases::get::{GetPreferencesParams, GetPreferencesUseCase};
use business::domain::preferences::use_cases::save::{
    SavePreferencesParams, SavePreferencesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::preferences::dto::{PreferencesResponse, SavePreferencesRequest};
use crate::api::security::UserHeader;
use crate::api::tags::ApiTags;

pub struct PreferencesApi {
    get_use_case: Arc<dyn GetPreferencesUseCase>,
    save_use_case: Arc<dyn SavePreferencesUseCase>,
}

impl PreferencesApi {
    pub fn new(
        get_use_case: Arc<dyn GetPreferencesUseCase>,
        save_use_case: Arc<dyn SavePreferencesUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            save_use_case,
        }
    }
}

/// Last search of the user, used to prefill the form
#[OpenApi]
impl PreferencesApi {
    /// Get saved preferences
    #[oai(path = "/preferences", method = "get", tag = "ApiTags::Preferences")]
    async fn get(&self, auth: UserHeader) -> GetPreferencesResponse {
        match self
            .get_use_case
            .execute(GetPreferencesParams { user_id: auth.0 })
            .await
        {
            Ok(prefs) => GetPreferencesResponse::Ok(Json(prefs.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetPreferencesResponse::NotFound(json),
                    _ => GetPreferencesResponse::InternalError(json),
                }
            }
        }
    }

    /// Save preferences
    ///
    /// Replaces whatever was stored before.
    #[oai(path = "/preferences", method = "put", tag = "ApiTags::Preferences")]
    async fn save(
        &self,
        auth: UserHeader,
        body: Json<SavePreferencesRequest>,
    ) -> SavePreferencesResponse {
        let params = SavePreferencesParams {
            user_id: auth.0,
            interests: body.0.interests,
            budget: body.0.budget,
            occasion: body.0.occasion,
        };

        match self.save_use_case.execute(params).await {
            Ok(prefs) => SavePreferencesResponse::Ok(Json(prefs.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SavePreferencesResponse::BadRequest(json),
                    _ => SavePreferencesResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPreferencesResponse {
    #[oai(status = 200)]
    Ok(Json<PreferencesResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SavePreferencesResponse {
    #[oai(status = 200)]
    Ok(Json<PreferencesResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
