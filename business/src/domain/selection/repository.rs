use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{GiftId, UserId};

use super::model::{Selection, SelectionList};

#[async_trait]
pub trait SelectionRepository: Send + Sync {
    async fn get_all(
        &self,
        user_id: &UserId,
        list: SelectionList,
    ) -> Result<Vec<Selection>, RepositoryError>;
    async fn find_by_gift(
        &self,
        user_id: &UserId,
        gift_id: GiftId,
        list: SelectionList,
    ) -> Result<Option<Selection>, RepositoryError>;
    async fn save(&self, selection: &Selection) -> Result<(), RepositoryError>;
    /// Returns the number of removed rows.
    async fn delete_by_gift(
        &self,
        user_id: &UserId,
        gift_id: GiftId,
        list: SelectionList,
    ) -> Result<u64, RepositoryError>;
}
