#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("selection.gift_name_empty")]
    GiftNameEmpty,
    #[error("selection.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
