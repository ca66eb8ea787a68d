use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::UserPreferences;

#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserPreferences>, RepositoryError>;
    /// Inserts or replaces the preferences of `preferences.user_id`.
    async fn save(&self, preferences: &UserPreferences) -> Result<(), RepositoryError>;
}
