use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::preferences::errors::PreferencesError;
use crate::domain::preferences::model::UserPreferences;
use crate::domain::preferences::repository::PreferencesRepository;
use crate::domain::preferences::use_cases::get::{GetPreferencesParams, GetPreferencesUseCase};

pub struct GetPreferencesUseCaseImpl {
    pub repository: Arc<dyn PreferencesRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPreferencesUseCase for GetPreferencesUseCaseImpl {
    async fn execute(
        &self,
        params: GetPreferencesParams,
    ) -> Result<UserPreferences, PreferencesError> {
        self.logger
            .info(&format!("Fetching preferences of user {}", params.user_id));

        match self.repository.get(&params.user_id).await? {
            Some(preferences) => Ok(preferences),
            None => {
                self.logger.info(&format!(
                    "No preferences stored for user {}",
                    params.user_id
                ));
                Err(PreferencesError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub PreferencesRepo {}

        #[async_trait]
        impl PreferencesRepository for PreferencesRepo {
            async fn get(&self, user_id: &UserId) -> Result<Option<UserPreferences>, RepositoryError>;
            async fn save(&self, preferences: &UserPreferences) -> Result<(), RepositoryError>;
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

    fn params() -> GetPreferencesParams {
        GetPreferencesParams {
            user_id: UserId::new("test-user-id"),
        }
    }

    #[tokio::test]
    async fn should_return_stored_preferences() {
        let mut mock_repo = MockPreferencesRepo::new();
        mock_repo.expect_get().times(1).returning(|user_id| {
            Ok(Some(UserPreferences::from_repository(
                user_id.clone(),
                vec!["Travel".to_string()],
                1500.0,
                Some("Graduation".to_string()),
                Utc::now(),
            )))
        });

        let use_case = GetPreferencesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        let prefs = result.unwrap();
        assert_eq!(prefs.interests, vec!["Travel".to_string()]);
        assert_eq!(prefs.budget, 1500.0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_nothing_stored() {
        let mut mock_repo = MockPreferencesRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));

        let use_case = GetPreferencesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(PreferencesError::NotFound)));
    }

    #[tokio::test]
    async fn should_return_error_when_repository_fails() {
        let mut mock_repo = MockPreferencesRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetPreferencesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result, Err(PreferencesError::Repository(_))));
    }
}
