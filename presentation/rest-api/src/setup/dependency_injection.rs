use std::sync::Arc;

use logger::TracingLogger;
use persistence::gift::repository::GiftRepositoryPostgres;
use persistence::preferences::repository::PreferencesRepositoryPostgres;
use persistence::selection::repository::SelectionRepositoryPostgres;

use business::application::preferences::get::GetPreferencesUseCaseImpl;
use business::application::preferences::save::SavePreferencesUseCaseImpl;
use business::application::selection::add::AddSelectionUseCaseImpl;
use business::application::selection::get_all::GetSelectionsUseCaseImpl;
use business::application::selection::remove::RemoveSelectionUseCaseImpl;
use business::application::suggestion::generate::GenerateSuggestionsUseCaseImpl;
use business::domain::suggestion::engine::SuggestionEngine;

use crate::api::health::routes::HealthApi;
use crate::api::preferences::routes::PreferencesApi;
use crate::api::selection::routes::SelectionApi;
use crate::api::suggestion::routes::SuggestionApi;
use crate::config::suggestion_config::SuggestionConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub suggestion_api: SuggestionApi,
    pub selection_api: SelectionApi,
    pub preferences_api: PreferencesApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, suggestions: &SuggestionConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let gift_repository = Arc::new(GiftRepositoryPostgres::new(pool.clone()));
        let selection_repository = Arc::new(SelectionRepositoryPostgres::new(pool.clone()));
        let preferences_repository = Arc::new(PreferencesRepositoryPostgres::new(pool));

        // Suggestion use cases
        let generate_suggestions_use_case = Arc::new(GenerateSuggestionsUseCaseImpl {
            repository: gift_repository,
            engine: SuggestionEngine::new(suggestions.engine_options()),
            logger: logger.clone(),
        });

        // Selection use cases
        let add_selection_use_case = Arc::new(AddSelectionUseCaseImpl {
            repository: selection_repository.clone(),
            logger: logger.clone(),
        });
        let get_selections_use_case = Arc::new(GetSelectionsUseCaseImpl {
            repository: selection_repository.clone(),
            logger: logger.clone(),
        });
        let remove_selection_use_case = Arc::new(RemoveSelectionUseCaseImpl {
            repository: selection_repository,
            logger: logger.clone(),
        });

        // Preferences use cases
        let get_preferences_use_case = Arc::new(GetPreferencesUseCaseImpl {
            repository: preferences_repository.clone(),
            logger: logger.clone(),
        });
        let save_preferences_use_case = Arc::new(SavePreferencesUseCaseImpl {
            repository: preferences_repository,
            logger,
        });

        Self {
            health_api: HealthApi,
            suggestion_api: SuggestionApi::new(generate_suggestions_use_case),
            selection_api: SelectionApi::new(
                add_selection_use_case,
                get_selections_use_case,
                remove_selection_use_case,
            ),
            preferences_api: PreferencesApi::new(
                get_preferences_use_case,
                save_preferences_use_case,
            ),
        }
    }
}
