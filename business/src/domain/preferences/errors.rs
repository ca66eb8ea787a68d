#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("preferences.invalid_budget")]
    InvalidBudget,
    #[error("preferences.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
