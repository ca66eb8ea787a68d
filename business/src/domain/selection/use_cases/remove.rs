use async_trait::async_trait;

use crate::domain::selection::errors::SelectionError;
use crate::domain::selection::model::SelectionList;
use crate::domain::shared::value_objects::{GiftId, UserId};

pub struct RemoveSelectionParams {
    pub user_id: UserId,
    pub gift_id: GiftId,
    pub list: SelectionList,
}

#[async_trait]
pub trait RemoveSelectionUseCase: Send + Sync {
    async fn execute(&self, params: RemoveSelectionParams) -> Result<(), SelectionError>;
}
