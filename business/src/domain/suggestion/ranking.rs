use regex::{Regex, RegexBuilder};

use crate::domain::gift::model::Gift;

use super::candidates::MAX_RESULTS;
use super::model::{Candidate, Suggestion, SuggestionRequest};
use super::templates::is_priority_interest;

/// Bonus for gifts mentioning a requested priority interest.
pub const PRIORITY_MATCH_SCORE: f64 = 100.0;
/// Maximum bonus for a price sitting exactly on the budget.
pub const PRICE_PROXIMITY_SCORE: f64 = 20.0;

/// Scores, filters and orders candidates for one request.
pub struct Ranker {
    budget: f64,
    priority_terms: Option<Regex>,
}

impl Ranker {
    pub fn for_request(request: &SuggestionRequest) -> Self {
        let terms: Vec<String> = request
            .interests
            .iter()
            .filter(|i| is_priority_interest(i))
            .map(|i| regex::escape(i))
            .collect();

        // Escaped literals always compile.
        let priority_terms = if terms.is_empty() {
            None
        } else {
            RegexBuilder::new(&terms.join("|"))
                .case_insensitive(true)
                .build()
                .ok()
        };

        Self {
            budget: request.budget,
            priority_terms,
        }
    }

    /// 100 when the name or description mentions a requested priority
    /// interest, plus up to 20 for being priced close to the budget.
    pub fn score(&self, gift: &Gift) -> f64 {
        self.priority_match(gift) + price_proximity(gift.price, self.budget)
    }

    fn priority_match(&self, gift: &Gift) -> f64 {
        match &self.priority_terms {
            Some(terms) if terms.is_match(&gift.name) || terms.is_match(&gift.description) => {
                PRIORITY_MATCH_SCORE
            }
            _ => 0.0,
        }
    }

    /// Drops over-budget candidates, then sorts by descending score. Equal
    /// scores keep pool order.
    pub fn rank(&self, pool: Vec<Candidate>) -> Vec<Suggestion> {
        let mut ranked: Vec<Suggestion> = pool
            .into_iter()
            .filter(|c| c.gift.price <= self.budget)
            .map(|c| Suggestion {
                score: self.score(&c.gift),
                gift: c.gift,
                origin: c.origin,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(MAX_RESULTS);
        ranked
    }
}

pub fn price_proximity(price: f64, budget: f64) -> f64 {
    PRICE_PROXIMITY_SCORE * (1.0 - (budget - price).abs() / budget)
}
