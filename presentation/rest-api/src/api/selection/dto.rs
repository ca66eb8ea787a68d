use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};

use business::domain::selection::model::{Selection, SelectionList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SelectionListDto {
    #[oai(rename = "wishlist")]
    Wishlist,
    #[oai(rename = "cart")]
    Cart,
}

impl From<SelectionListDto> for SelectionList {
    fn from(list: SelectionListDto) -> Self {
        match list {
            SelectionListDto::Wishlist => SelectionList::Wishlist,
            SelectionListDto::Cart => SelectionList::Cart,
        }
    }
}

impl From<SelectionList> for SelectionListDto {
    fn from(list: SelectionList) -> Self {
        match list {
            SelectionList::Wishlist => SelectionListDto::Wishlist,
            SelectionList::Cart => SelectionListDto::Cart,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddSelectionRequest {
    /// Id of the suggested gift
    pub gift_id: String,
    /// Display name of the gift
    pub gift_name: String,
    pub list: SelectionListDto,
}

#[derive(Debug, Clone, Object)]
pub struct SelectionResponse {
    pub id: String,
    pub gift_id: String,
    pub gift_name: String,
    pub list: SelectionListDto,
    pub created_at: DateTime<Utc>,
}

impl From<Selection> for SelectionResponse {
    fn from(selection: Selection) -> Self {
        Self {
            id: selection.id.to_string(),
            gift_id: selection.gift_id.to_string(),
            gift_name: selection.gift_name,
            list: selection.list.into(),
            created_at: selection.created_at,
        }
    }
}
