use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::selection::errors::SelectionError;
use crate::domain::selection::model::Selection;
use crate::domain::selection::repository::SelectionRepository;
use crate::domain::selection::use_cases::add::{AddSelectionParams, AddSelectionUseCase};

pub struct AddSelectionUseCaseImpl {
    pub repository: Arc<dyn SelectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddSelectionUseCase for AddSelectionUseCaseImpl {
    async fn execute(&self, params: AddSelectionParams) -> Result<Selection, SelectionError> {
        self.logger.info(&format!(
            "Adding gift {} to {} of user {}",
            params.gift_id, params.list, params.user_id
        ));

        // Adding the same gift twice is a no-op
        if let Some(existing) = self
            .repository
            .find_by_gift(&params.user_id, params.gift_id, params.list)
            .await?
        {
            self.logger.info(&format!(
                "Gift {} already in {}, skipping",
                params.gift_id, params.list
            ));
            return Ok(existing);
        }

        let selection = Selection::new(
            params.user_id,
            params.gift_id,
            params.gift_name,
            params.list,
        )?;
        self.repository.save(&selection).await?;

        // A concurrent add may have won the insert; return whatever row is stored
        let stored = self
            .repository
            .find_by_gift(&selection.user_id, selection.gift_id, selection.list)
            .await?
            .unwrap_or(selection);

        self.logger.info(&format!("Selection stored: {}", stored.id));
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::selection::model::SelectionList;
    use crate::domain::shared::value_objects::{GiftId, UserId};
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

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    fn params(gift_id: GiftId, name: &str, list: SelectionList) -> AddSelectionParams {
        AddSelectionParams {
            user_id: test_user_id(),
            gift_id,
            gift_name: name.to_string(),
            list,
        }
    }

    #[tokio::test]
    async fn should_add_gift_to_wishlist() {
        let gift_id = GiftId::new(Uuid::new_v4());
        let mut mock_repo = MockSelectionRepo::new();
        mock_repo
            .expect_find_by_gift()
            .returning(|_, _, _| Ok(None));
        mock_repo
            .expect_save()
            .withf(move |s| s.gift_id == gift_id && s.list == SelectionList::Wishlist)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddSelectionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(gift_id, "Smart Watch", SelectionList::Wishlist))
            .await;

        assert!(result.is_ok());
        let selection = result.unwrap();
        assert_eq!(selection.gift_name, "Smart Watch");
        assert_eq!(selection.user_id, test_user_id());
    }

    #[tokio::test]
    async fn should_not_duplicate_when_gift_already_in_list() {
        let gift_id = GiftId::new(Uuid::new_v4());
        let existing = Selection::from_repository(
            Uuid::new_v4(),
            test_user_id(),
            gift_id,
            "Smart Watch".to_string(),
            SelectionList::Cart,
            chrono::Utc::now(),
        );

        let mut mock_repo = MockSelectionRepo::new();
        let existing_clone = existing.clone();
        mock_repo
            .expect_find_by_gift()
            .returning(move |_, _, _| Ok(Some(existing_clone.clone())));
        mock_repo.expect_save().never();

        let use_case = AddSelectionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(gift_id, "Smart Watch", SelectionList::Cart))
            .await;

        assert_eq!(result.unwrap().id, existing.id);
    }

    #[tokio::test]
    async fn should_return_stored_row_when_concurrent_add_won() {
        let gift_id = GiftId::new(Uuid::new_v4());
        let stored = Selection::from_repository(
            Uuid::new_v4(),
            test_user_id(),
            gift_id,
            "Tablet".to_string(),
            SelectionList::Cart,
            chrono::Utc::now(),
        );

        let mut mock_repo = MockSelectionRepo::new();
        let stored_clone = stored.clone();
        let mut lookups = 0;
        mock_repo
            .expect_find_by_gift()
            .times(2)
            .returning(move |_, _, _| {
                lookups += 1;
                if lookups == 1 {
                    Ok(None)
                } else {
                    Ok(Some(stored_clone.clone()))
                }
            });
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = AddSelectionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(gift_id, "Tablet", SelectionList::Cart))
            .await;

        assert_eq!(result.unwrap().id, stored.id);
    }

    #[tokio::test]
    async fn should_reject_when_gift_name_empty() {
        let mut mock_repo = MockSelectionRepo::new();
        mock_repo
            .expect_find_by_gift()
            .returning(|_, _, _| Ok(None));

        let use_case = AddSelectionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                GiftId::new(Uuid::new_v4()),
                "",
                SelectionList::Wishlist,
            ))
            .await;

        assert!(matches!(result, Err(SelectionError::GiftNameEmpty)));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockSelectionRepo::new();
        mock_repo
            .expect_find_by_gift()
            .returning(|_, _, _| Err(RepositoryError::DatabaseError));

        let use_case = AddSelectionUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                GiftId::new(Uuid::new_v4()),
                "Tablet",
                SelectionList::Cart,
            ))
            .await;

        assert!(matches!(result, Err(SelectionError::Repository(_))));
    }
}
