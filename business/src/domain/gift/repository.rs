use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Gift;

/// Read-only access to the externally managed gift catalogue.
#[async_trait]
pub trait GiftRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Gift>, RepositoryError>;
}
