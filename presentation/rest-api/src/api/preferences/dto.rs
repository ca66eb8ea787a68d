use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::preferences::model::UserPreferences;

#[derive(Debug, Clone, Object)]
pub struct SavePreferencesRequest {
    pub interests: Vec<String>,
    pub budget: f64,
    #[oai(skip_serializing_if_is_none)]
    pub occasion: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct PreferencesResponse {
    pub interests: Vec<String>,
    pub budget: f64,
    #[oai(skip_serializing_if_is_none)]
    pub occasion: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserPreferences> for PreferencesResponse {
    fn from(prefs: UserPreferences) -> Self {
        Self {
            interests: prefs.interests,
            budget: prefs.budget,
            occasion: prefs.occasion,
            updated_at: prefs.updated_at,
        }
    }
}
