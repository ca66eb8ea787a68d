use async_trait::async_trait;

use crate::domain::selection::errors::SelectionError;
use crate::domain::selection::model::{Selection, SelectionList};
use crate::domain::shared::value_objects::{GiftId, UserId};

pub struct AddSelectionParams {
    pub user_id: UserId,
    pub gift_id: GiftId,
    pub gift_name: String,
    pub list: SelectionList,
}

#[async_trait]
pub trait AddSelectionUseCase: Send + Sync {
    async fn execute(&self, params: AddSelectionParams) -> Result<Selection, SelectionError>;
}
