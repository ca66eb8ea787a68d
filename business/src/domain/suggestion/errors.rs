#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.invalid_budget")]
    InvalidBudget,
    #[error("suggestion.no_interests_selected")]
    NoInterestsSelected,
    #[error("suggestion.no_occasion_selected")]
    NoOccasionSelected,
    #[error("suggestion.empty_result")]
    EmptyResult,
    #[error("suggestion.catalogue_unavailable")]
    CatalogueUnavailable,
}
