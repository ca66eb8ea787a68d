use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::gift::catalogue::CatalogueSnapshot;
use crate::domain::gift::repository::GiftRepository;
use crate::domain::logger::Logger;
use crate::domain::suggestion::engine::SuggestionEngine;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{Suggestion, SuggestionRequest};
use crate::domain::suggestion::use_cases::generate::{
    GenerateSuggestionsParams, GenerateSuggestionsUseCase,
};

pub struct GenerateSuggestionsUseCaseImpl {
    pub repository: Arc<dyn GiftRepository>,
    pub engine: SuggestionEngine,
    pub logger: Arc<dyn Logger>,
}

impl GenerateSuggestionsUseCaseImpl {
    fn validate(params: &GenerateSuggestionsParams) -> Result<(), SuggestionError> {
        if !params.budget.is_finite() || params.budget <= 0.0 {
            return Err(SuggestionError::InvalidBudget);
        }

        if params.interests.iter().all(|i| i.trim().is_empty()) {
            return Err(SuggestionError::NoInterestsSelected);
        }

        if params.occasion.trim().is_empty() {
            return Err(SuggestionError::NoOccasionSelected);
        }

        Ok(())
    }
}

#[async_trait]
impl GenerateSuggestionsUseCase for GenerateSuggestionsUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateSuggestionsParams,
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        self.logger.info(&format!(
            "Generating suggestions for interests {:?}, budget {}, occasion '{}'",
            params.interests, params.budget, params.occasion
        ));

        if let Err(err) = Self::validate(&params) {
            self.logger
                .warn(&format!("Rejected suggestion request: {}", err));
            return Err(err);
        }

        let gifts = self.repository.get_all().await.map_err(|err| {
            self.logger
                .error(&format!("Failed to load gift catalogue: {}", err));
            SuggestionError::CatalogueUnavailable
        })?;

        let catalogue = CatalogueSnapshot::new(gifts);
        if !catalogue.duplicates().is_empty() {
            self.logger.warn(&format!(
                "Catalogue contains duplicated gift names, ignoring later entries: {:?}",
                catalogue.duplicates()
            ));
        }

        let request = SuggestionRequest::new(params.interests, params.budget, params.occasion);
        let suggestions = self.engine.generate(&request, &catalogue);

        if suggestions.is_empty() {
            self.logger.error("Suggestion engine returned no results");
            return Err(SuggestionError::EmptyResult);
        }

        self.logger.debug(&format!(
            "Budget tier {} over {} catalogue gifts, origins: {:?}",
            request.tier(),
            catalogue.len(),
            suggestions
                .iter()
                .map(|s| s.origin.to_string())
                .collect::<Vec<_>>()
        ));
        self.logger
            .info(&format!("Generated {} suggestions", suggestions.len()));

        Ok(suggestions)
    }
}
