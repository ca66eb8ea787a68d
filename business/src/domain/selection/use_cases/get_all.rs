use async_trait::async_trait;

use crate::domain::selection::errors::SelectionError;
use crate::domain::selection::model::{Selection, SelectionList};
use crate::domain::shared::value_objects::UserId;

pub struct GetSelectionsParams {
    pub user_id: UserId,
    pub list: SelectionList,
}

#[async_trait]
pub trait GetSelectionsUseCase: Send + Sync {
    async fn execute(&self, params: GetSelectionsParams) -> Result<Vec<Selection>, SelectionError>;
}
