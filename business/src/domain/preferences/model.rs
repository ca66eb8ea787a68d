use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::PreferencesError;
use crate::domain::shared::value_objects::UserId;

/// The last interests, budget and occasion a user searched with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub user_id: UserId,
    pub interests: Vec<String>,
    pub budget: f64,
    pub occasion: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserPreferences {
    /// Interests are trimmed and deduplicated case-insensitively, keeping the
    /// first spelling and the original order.
    pub fn new(
        user_id: UserId,
        interests: Vec<String>,
        budget: f64,
        occasion: Option<String>,
    ) -> Result<Self, PreferencesError> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(PreferencesError::InvalidBudget);
        }

        let mut kept: Vec<String> = Vec::with_capacity(interests.len());
        for interest in interests {
            let interest = interest.trim();
            if interest.is_empty() || kept.iter().any(|k| k.eq_ignore_ascii_case(interest)) {
                continue;
            }
            kept.push(interest.to_string());
        }

        let occasion = occasion
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty());

        Ok(Self {
            user_id,
            interests: kept,
            budget,
            occasion,
            updated_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        interests: Vec<String>,
        budget: f64,
        occasion: Option<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            interests,
            budget,
            occasion,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn should_normalize_interests() {
        let prefs = UserPreferences::new(
            UserId::new("user-1"),
            strings(&[" Music ", "books", "", "music", "Books", "Travel"]),
            250.0,
            Some(" Birthday ".to_string()),
        )
        .unwrap();

        assert_eq!(prefs.interests, strings(&["Music", "books", "Travel"]));
        assert_eq!(prefs.occasion.as_deref(), Some("Birthday"));
    }

    #[test]
    fn should_drop_blank_occasion() {
        let prefs =
            UserPreferences::new(UserId::new("user-1"), vec![], 10.0, Some("  ".to_string()))
                .unwrap();

        assert!(prefs.interests.is_empty());
        assert_eq!(prefs.occasion, None);
    }

    #[test]
    fn should_reject_invalid_budget() {
        for budget in [0.0, -1.0, f64::NAN] {
            let result = UserPreferences::new(UserId::new("user-1"), vec![], budget, None);
            assert!(matches!(result, Err(PreferencesError::InvalidBudget)));
        }
    }
}
