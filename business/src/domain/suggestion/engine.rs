use std::collections::HashSet;

use super::candidates::{CandidatePool, collect_candidates, gift_card_candidate};
use super::model::{Candidate, Suggestion, SuggestionRequest};
use super::ranking::{Ranker, price_proximity};
use super::services::CatalogueAccess;

/// Tunables for the suggestion engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Drop candidates whose name repeats an earlier one before ranking.
    /// Off by default: the same template may legitimately appear twice.
    pub deduplicate_by_name: bool,
}

/// Rule-based gift suggestion engine.
///
/// Pure and synchronous: the output depends only on the request and the
/// catalogue handed in, so one engine can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    options: EngineOptions,
}

impl SuggestionEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Returns between one and six suggestions, each priced within budget.
    ///
    /// Expects `request.budget > 0`; callers validate input first.
    pub fn generate(
        &self,
        request: &SuggestionRequest,
        catalogue: &dyn CatalogueAccess,
    ) -> Vec<Suggestion> {
        let pool = match collect_candidates(request, catalogue) {
            CandidatePool::GiftCard(card) => return vec![gift_card_suggestion(card)],
            CandidatePool::Pool(pool) => pool,
        };

        let pool = if self.options.deduplicate_by_name {
            deduplicate_by_name(pool)
        } else {
            pool
        };

        let ranked = Ranker::for_request(request).rank(pool);
        if ranked.is_empty() {
            // Every candidate was over budget.
            return vec![gift_card_suggestion(gift_card_candidate(request.budget))];
        }

        ranked
    }
}

/// Runs the engine with default options.
pub fn generate_suggestions(
    request: &SuggestionRequest,
    catalogue: &dyn CatalogueAccess,
) -> Vec<Suggestion> {
    SuggestionEngine::default().generate(request, catalogue)
}

fn gift_card_suggestion(card: Candidate) -> Suggestion {
    Suggestion {
        score: price_proximity(card.gift.price, card.gift.price),
        gift: card.gift,
        origin: card.origin,
    }
}

fn deduplicate_by_name(pool: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    pool.into_iter()
        .filter(|c| seen.insert(c.gift.name.clone()))
        .collect()
}
