use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::selection::use_cases::add::{AddSelectionParams, AddSelectionUseCase};
use business::domain::selection::use_cases::get_all::{GetSelectionsParams, GetSelectionsUseCase};
use business::domain::selection::use_cases::remove::{
    RemoveSelectionParams, RemoveSelectionUseCase,
};
use business::domain::shared::value_objects::GiftId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::UserHeader;
use crate::api::selection::dto::{AddSelectionRequest, SelectionListDto, SelectionResponse};
use crate::api::tags::ApiTags;

pub struct SelectionApi {
    add_use_case: Arc<dyn AddSelectionUseCase>,
    get_all_use_case: Arc<dyn GetSelectionsUseCase>,
    remove_use_case: Arc<dyn RemoveSelectionUseCase>,
}

impl SelectionApi {
    pub fn new(
        add_use_case: Arc<dyn AddSelectionUseCase>,
        get_all_use_case: Arc<dyn GetSelectionsUseCase>,
        remove_use_case: Arc<dyn RemoveSelectionUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            get_all_use_case,
            remove_use_case,
        }
    }
}

fn parse_gift_id(raw: &str) -> Result<GiftId, Json<ErrorResponse>> {
    raw.parse::<GiftId>()
        .map_err(|_| ErrorResponse::validation("selection.invalid_gift_id"))
}

/// Wishlist and cart
///
/// Both lists are keyed by gift id and scoped to the calling user.
#[OpenApi]
impl SelectionApi {
    /// List a user's wishlist or cart
    #[oai(path = "/selections", method = "get", tag = "ApiTags::Selections")]
    async fn get_all(
        &self,
        auth: UserHeader,
        list: Query<SelectionListDto>,
    ) -> GetSelectionsResponse {
        let params = GetSelectionsParams {
            user_id: auth.0,
            list: list.0.into(),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(selections) => {
                let responses: Vec<SelectionResponse> =
                    selections.into_iter().map(|s| s.into()).collect();
                GetSelectionsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSelectionsResponse::InternalError(json)
            }
        }
    }

    /// Add a gift to the wishlist or cart
    ///
    /// Adding a gift that is already in the list returns the existing entry.
    #[oai(path = "/selections", method = "post", tag = "ApiTags::Selections")]
    async fn add(&self, auth: UserHeader, body: Json<AddSelectionRequest>) -> AddSelectionResponse {
        let gift_id = match parse_gift_id(&body.0.gift_id) {
            Ok(id) => id,
            Err(json) => return AddSelectionResponse::BadRequest(json),
        };

        let params = AddSelectionParams {
            user_id: auth.0,
            gift_id,
            gift_name: body.0.gift_name,
            list: body.0.list.into(),
        };

        match self.add_use_case.execute(params).await {
            Ok(selection) => AddSelectionResponse::Created(Json(selection.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddSelectionResponse::BadRequest(json),
                    _ => AddSelectionResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a gift from the wishlist or cart
    #[oai(
        path = "/selections/:gift_id",
        method = "delete",
        tag = "ApiTags::Selections"
    )]
    async fn remove(
        &self,
        auth: UserHeader,
        gift_id: Path<String>,
        list: Query<SelectionListDto>,
    ) -> RemoveSelectionResponse {
        let gift_id = match parse_gift_id(&gift_id.0) {
            Ok(id) => id,
            Err(json) => return RemoveSelectionResponse::BadRequest(json),
        };

        let params = RemoveSelectionParams {
            user_id: auth.0,
            gift_id,
            list: list.0.into(),
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveSelectionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveSelectionResponse::NotFound(json),
                    _ => RemoveSelectionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSelectionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<SelectionResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddSelectionResponse {
    #[oai(status = 201)]
    Created(Json<SelectionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveSelectionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
