use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::selection::model::{Selection, SelectionList};
use business::domain::selection::repository::SelectionRepository;
use business::domain::shared::value_objects::{GiftId, UserId};

use super::entity::SelectionEntity;

pub struct SelectionRepositoryPostgres {
    pool: PgPool,
}

impl SelectionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SelectionRepository for SelectionRepositoryPostgres {
    async fn get_all(
        &self,
        user_id: &UserId,
        list: SelectionList,
    ) -> Result<Vec<Selection>, RepositoryError> {
        let entities = sqlx::query_as::<_, SelectionEntity>(
            "SELECT id, user_id, gift_id, gift_name, list, created_at FROM selections WHERE user_id = $1 AND list = $2 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .bind(list.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn find_by_gift(
        &self,
        user_id: &UserId,
        gift_id: GiftId,
        list: SelectionList,
    ) -> Result<Option<Selection>, RepositoryError> {
        let entity = sqlx::query_as::<_, SelectionEntity>(
            "SELECT id, user_id, gift_id, gift_name, list, created_at FROM selections WHERE user_id = $1 AND gift_id = $2 AND list = $3",
        )
        .bind(user_id.as_str())
        .bind(gift_id.as_uuid())
        .bind(list.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn save(&self, selection: &Selection) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO selections (id, user_id, gift_id, gift_name, list, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, gift_id, list) DO NOTHING"#,
        )
        .bind(selection.id)
        .bind(selection.user_id.as_str())
        .bind(selection.gift_id.as_uuid())
        .bind(&selection.gift_name)
        .bind(selection.list.to_string())
        .bind(selection.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete_by_gift(
        &self,
        user_id: &UserId,
        gift_id: GiftId,
        list: SelectionList,
    ) -> Result<u64, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM selections WHERE user_id = $1 AND gift_id = $2 AND list = $3")
                .bind(user_id.as_str())
                .bind(gift_id.as_uuid())
                .bind(list.to_string())
                .execute(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected())
    }
}
