use crate::domain::gift::model::Gift;

use super::budget::BudgetTier;

/// Input of the suggestion engine.
///
/// Interest order matters: the first one is the primary interest.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub interests: Vec<String>,
    pub budget: f64,
    pub occasion: Option<String>,
}

impl SuggestionRequest {
    /// Builds a request, trimming labels and treating a blank occasion as none.
    pub fn new(interests: Vec<String>, budget: f64, occasion: impl Into<String>) -> Self {
        let occasion = occasion.into().trim().to_string();
        Self {
            interests: interests
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            budget,
            occasion: if occasion.is_empty() {
                None
            } else {
                Some(occasion)
            },
        }
    }

    pub fn tier(&self) -> BudgetTier {
        BudgetTier::classify(self.budget)
    }

    pub fn occasion(&self) -> Option<&str> {
        self.occasion.as_deref()
    }
}

/// Where a suggested gift came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionOrigin {
    /// Read from the catalogue.
    Catalogue,
    /// Built from a per-tier template during backfill.
    Template,
    /// Last-resort gift card sized to the budget.
    GiftCard,
}

impl std::fmt::Display for SuggestionOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionOrigin::Catalogue => write!(f, "catalogue"),
            SuggestionOrigin::Template => write!(f, "template"),
            SuggestionOrigin::GiftCard => write!(f, "gift_card"),
        }
    }
}

/// A pool entry before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub gift: Gift,
    pub origin: SuggestionOrigin,
}

/// A ranked gift returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub gift: Gift,
    pub origin: SuggestionOrigin,
    pub score: f64,
}
