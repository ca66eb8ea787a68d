use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::preferences::model::UserPreferences;
use business::domain::shared::value_objects::UserId;

use crate::numeric;

#[derive(Debug, FromRow)]
pub struct PreferencesEntity {
    pub user_id: String,
    pub interests: Vec<String>,
    pub budget: BigDecimal,
    pub occasion: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl PreferencesEntity {
    pub fn into_domain(self) -> Result<UserPreferences, RepositoryError> {
        Ok(UserPreferences::from_repository(
            UserId::new(self.user_id),
            self.interests,
            numeric::to_f64(&self.budget)?,
            self.occasion,
            self.updated_at,
        ))
    }
}
