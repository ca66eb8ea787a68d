use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::selection::errors::SelectionError;
use crate::domain::selection::repository::SelectionRepository;
use crate::domain::selection::use_cases::remove::{RemoveSelectionParams, RemoveSelectionUseCase};

pub struct RemoveSelectionUseCaseImpl {
    pub repository: Arc<dyn SelectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveSelectionUseCase for RemoveSelectionUseCaseImpl {
    async fn execute(&self, params: RemoveSelectionParams) -> Result<(), SelectionError> {
        self.logger.info(&format!(
            "Removing gift {} from {} of user {}",
            params.gift_id, params.list, params.user_id
        ));

        let removed = self
            .repository
            .delete_by_gift(&params.user_id, params.gift_id, params.list)
            .await?;

        if removed == 0 {
            self.logger.warn(&format!(
                "Gift {} was not in {}",
                params.gift_id, params.list
            ));
            return Err(SelectionError::NotFound);
        }

        Ok(())
    }
}
