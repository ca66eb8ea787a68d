use async_trait::async_trait;

use crate::domain::preferences::errors::PreferencesError;
use crate::domain::preferences::model::UserPreferences;
use crate::domain::shared::value_objects::UserId;

pub struct SavePreferencesParams {
    pub user_id: UserId,
    pub interests: Vec<String>,
    pub budget: f64,
    pub occasion: Option<String>,
}

#[async_trait]
pub trait SavePreferencesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SavePreferencesParams,
    ) -> Result<UserPreferences, PreferencesError>;
}
