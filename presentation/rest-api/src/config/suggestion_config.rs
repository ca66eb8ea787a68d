use business::domain::suggestion::engine::EngineOptions;
use std::env;

/// Suggestion engine settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionConfig {
    pub deduplicate_by_name: bool,
}

impl SuggestionConfig {
    /// Environment variables:
    /// - SUGGESTIONS_DEDUPLICATE: drop suggestions whose name was already
    ///   returned ("true"/"yes"/"1" in any case, default: false)
    pub fn from_env() -> Self {
        Self {
            deduplicate_by_name: parse_flag(env::var("SUGGESTIONS_DEDUPLICATE").ok()),
        }
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            deduplicate_by_name: self.deduplicate_by_name,
        }
    }
}

fn parse_flag(raw: Option<String>) -> bool {
    raw.is_some_and(|value| {
        let value = value.trim();
        ["1", "true", "yes"]
            .iter()
            .any(|accepted| value.eq_ignore_ascii_case(accepted))
    })
}
