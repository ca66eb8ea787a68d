use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::selection::errors::SelectionError;
use crate::domain::selection::model::Selection;
use crate::domain::selection::repository::SelectionRepository;
use crate::domain::selection::use_cases::get_all::{GetSelectionsParams, GetSelectionsUseCase};

pub struct GetSelectionsUseCaseImpl {
    pub repository: Arc<dyn SelectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSelectionsUseCase for GetSelectionsUseCaseImpl {
    async fn execute(&self, params: GetSelectionsParams) -> Result<Vec<Selection>, SelectionError> {
        self.logger.info(&format!(
            "Fetching {} of user {}",
            params.list, params.user_id
        ));
        let selections = self
            .repository
            .get_all(&params.user_id, params.list)
            .await?;
        self.logger
            .info(&format!("Found {} selections", selections.len()));
        Ok(selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::selection::model::SelectionList;
    use crate::domain::shared::value_objects::{GiftId, UserId};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub SelectionRepo {}

        #[async_trait]
        impl SelectionRepository for SelectionRepo {
            async fn get_all(&self, user_id: &UserId, list: SelectionList) -> Result<Vec<Selection>, RepositoryError>;
            async fn find_by_gift(&self, user_id: &UserId, gift_id: GiftId, list: SelectionList) -> Result<Option<Selection>, RepositoryError>;
            async fn save(&self, selection: &Selection) -> Result<(), RepositoryError>;
            async fn delete_by_gift(&self, user_id: &UserId, gift_id: GiftId, list: SelectionList) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_selections_of_requested_list() {
        let mut mock_repo = MockSelectionRepo::new();
        mock_repo
            .expect_get_all()
            .withf(|_, list| *list == SelectionList::Wishlist)
            .returning(|user_id, list| {
                Ok(vec![Selection::from_repository(
                    Uuid::new_v4(),
                    user_id.clone(),
                    GiftId::new(Uuid::new_v4()),
                    "Silk Scarf".to_string(),
                    list,
                    Utc::now(),
                )])
            });

        let use_case = GetSelectionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSelectionsParams {
                user_id: UserId::new("test-user-id"),
                list: SelectionList::Wishlist,
            })
            .await;

        let selections = result.unwrap();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].gift_name, "Silk Scarf");
    }

    #[tokio::test]
    async fn should_return_error_when_repository_fails() {
        let mut mock_repo = MockSelectionRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = GetSelectionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSelectionsParams {
                user_id: UserId::new("test-user-id"),
                list: SelectionList::Cart,
            })
            .await;

        assert!(matches!(result, Err(SelectionError::Repository(_))));
    }
}
