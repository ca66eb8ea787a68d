use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::preferences::errors::PreferencesError;
use crate::domain::preferences::model::UserPreferences;
use crate::domain::preferences::repository::PreferencesRepository;
use crate::domain::preferences::use_cases::save::{SavePreferencesParams, SavePreferencesUseCase};

pub struct SavePreferencesUseCaseImpl {
    pub repository: Arc<dyn PreferencesRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SavePreferencesUseCase for SavePreferencesUseCaseImpl {
    async fn execute(
        &self,
        params: SavePreferencesParams,
    ) -> Result<UserPreferences, PreferencesError> {
        self.logger
            .info(&format!("Saving preferences of user {}", params.user_id));

        let preferences = UserPreferences::new(
            params.user_id,
            params.interests,
            params.budget,
            params.occasion,
        )?;
        self.repository.save(&preferences).await?;

        self.logger.debug(&format!(
            "Preferences stored: {} interests, budget {}",
            preferences.interests.len(),
            preferences.budget
        ));
        Ok(preferences)
    }
}
