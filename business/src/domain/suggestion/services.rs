use crate::domain::gift::model::Gift;

use super::budget::BudgetTier;

/// Catalogue port consumed by the suggestion engine.
///
/// Lookups are synchronous and read-only: callers hand the engine an
/// immutable snapshot fetched beforehand.
pub trait CatalogueAccess: Send + Sync {
    /// Gifts tagged with `interest`, narrowed by `occasion` and by the price
    /// band of `tier` when those are given.
    fn lookup(&self, interest: &str, occasion: Option<&str>, tier: Option<BudgetTier>)
    -> Vec<Gift>;
}
