use std::collections::HashSet;

use crate::domain::suggestion::budget::BudgetTier;
use crate::domain::suggestion::services::CatalogueAccess;

use super::model::Gift;

/// Immutable in-memory view of the catalogue for one request.
///
/// Names must be unique inside a snapshot; later entries repeating an
/// earlier name are dropped and reported through [`duplicates`](Self::duplicates).
#[derive(Debug, Clone, Default)]
pub struct CatalogueSnapshot {
    gifts: Vec<Gift>,
    duplicates: Vec<String>,
}

impl CatalogueSnapshot {
    pub fn new(gifts: Vec<Gift>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(gifts.len());
        let mut duplicates = Vec::new();

        for gift in gifts {
            if seen.insert(gift.name.clone()) {
                kept.push(gift);
            } else {
                duplicates.push(gift.name);
            }
        }

        Self {
            gifts: kept,
            duplicates,
        }
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }
}

impl CatalogueAccess for CatalogueSnapshot {
    fn lookup(
        &self,
        interest: &str,
        occasion: Option<&str>,
        tier: Option<BudgetTier>,
    ) -> Vec<Gift> {
        self.gifts
            .iter()
            .filter(|g| g.has_interest(interest))
            .filter(|g| occasion.is_none_or(|o| g.suits_occasion(o)))
            .filter(|g| tier.is_none_or(|t| t.contains(g.price)))
            .cloned()
            .collect()
    }
}
