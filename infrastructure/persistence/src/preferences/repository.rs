use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::preferences::model::UserPreferences;
use business::domain::preferences::repository::PreferencesRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::PreferencesEntity;
use crate::numeric;

pub struct PreferencesRepositoryPostgres {
    pool: PgPool,
}

impl PreferencesRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferencesRepository for PreferencesRepositoryPostgres {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserPreferences>, RepositoryError> {
        let entity = sqlx::query_as::<_, PreferencesEntity>(
            "SELECT user_id, interests, budget, occasion, updated_at FROM user_preferences WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn save(&self, preferences: &UserPreferences) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO user_preferences (user_id, interests, budget, occasion, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                interests = EXCLUDED.interests,
                budget = EXCLUDED.budget,
                occasion = EXCLUDED.occasion,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(preferences.user_id.as_str())
        .bind(&preferences.interests)
        .bind(numeric::from_f64(preferences.budget)?)
        .bind(&preferences.occasion)
        .bind(preferences.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
