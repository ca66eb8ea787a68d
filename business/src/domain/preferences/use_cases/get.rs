use async_trait::async_trait;

use crate::domain::preferences::errors::PreferencesError;
use crate::domain::preferences::model::UserPreferences;
use crate::domain::shared::value_objects::UserId;

pub struct GetPreferencesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetPreferencesUseCase: Send + Sync {
    async fn execute(&self, params: GetPreferencesParams)
    -> Result<UserPreferences, PreferencesError>;
}
