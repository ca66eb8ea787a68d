use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::gift::model::Gift;
use business::domain::gift::repository::GiftRepository;

use super::entity::GiftEntity;

pub struct GiftRepositoryPostgres {
    pool: PgPool,
}

impl GiftRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GiftRepository for GiftRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Gift>, RepositoryError> {
        let entities = sqlx::query_as::<_, GiftEntity>(
            "SELECT id, name, price, description, primary_image, additional_images, interest_tags, occasion_tags, shop_link FROM gifts ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        // A broken row must not take the whole catalogue down
        let mut gifts = Vec::with_capacity(entities.len());
        for entity in entities {
            let id = entity.id;
            match entity.into_domain() {
                Ok(gift) => gifts.push(gift),
                Err(err) => tracing::warn!("Skipping gift {}: {}", id, err),
            }
        }

        Ok(gifts)
    }
}
