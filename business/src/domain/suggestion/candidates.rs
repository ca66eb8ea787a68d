use super::model::{Candidate, SuggestionOrigin, SuggestionRequest};
use super::services::CatalogueAccess;
use super::templates::{gift_card, is_priority_interest, templates_for};

/// Upper bound on both the candidate pool growth and the final result.
pub const MAX_RESULTS: usize = 6;
/// Below this pool size the backfill passes kick in.
pub const MIN_POOL: usize = 3;

/// Output of candidate generation.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidatePool {
    /// Unranked, possibly duplicated candidates.
    Pool(Vec<Candidate>),
    /// Nothing matched anywhere; this single gift card is the whole answer.
    GiftCard(Candidate),
}

/// Builds the candidate pool for `request`.
///
/// Passes run in order and each one only fires while the pool is still too
/// small:
/// 1. catalogue lookup per interest
/// 2. templates for the requested priority interests
/// 3. one template per requested interest
/// 4. a gift card worth the whole budget
pub fn collect_candidates(
    request: &SuggestionRequest,
    catalogue: &dyn CatalogueAccess,
) -> CandidatePool {
    let mut pool = catalogue_pass(request, catalogue);

    if pool.len() < MIN_POOL {
        priority_backfill(request, &mut pool);
    }

    if pool.len() < MIN_POOL {
        general_backfill(request, &mut pool);
    }

    if pool.is_empty() {
        return CandidatePool::GiftCard(gift_card_candidate(request.budget));
    }

    CandidatePool::Pool(pool)
}

pub fn gift_card_candidate(budget: f64) -> Candidate {
    Candidate {
        gift: gift_card(budget),
        origin: SuggestionOrigin::GiftCard,
    }
}

/// Suffix appended to descriptions of gifts found through a secondary interest.
pub fn secondary_interest_note(interest: &str) -> String {
    format!(" (Also matches your interest in {})", interest)
}

fn catalogue_pass(request: &SuggestionRequest, catalogue: &dyn CatalogueAccess) -> Vec<Candidate> {
    let tier = request.tier();
    let mut pool = Vec::new();

    for (position, interest) in request.interests.iter().enumerate() {
        // The current interest is always completed; the cap is only checked between interests.
        if pool.len() >= MAX_RESULTS {
            break;
        }

        for mut gift in catalogue.lookup(interest, request.occasion(), Some(tier)) {
            if position > 0 {
                gift.description.push_str(&secondary_interest_note(interest));
            }
            pool.push(Candidate {
                gift,
                origin: SuggestionOrigin::Catalogue,
            });
        }
    }

    pool
}

fn priority_backfill(request: &SuggestionRequest, pool: &mut Vec<Candidate>) {
    let tier = request.tier();

    for interest in request.interests.iter().filter(|i| is_priority_interest(i)) {
        for template in templates_for(interest, tier) {
            if pool.len() >= MAX_RESULTS {
                return;
            }
            pool.push(Candidate {
                gift: template.instantiate(request.budget),
                origin: SuggestionOrigin::Template,
            });
        }
    }
}

fn general_backfill(request: &SuggestionRequest, pool: &mut Vec<Candidate>) {
    let tier = request.tier();

    for interest in &request.interests {
        if pool.len() >= MAX_RESULTS {
            return;
        }
        if let Some(template) = templates_for(interest, tier).next() {
            pool.push(Candidate {
                gift: template.instantiate(request.budget),
                origin: SuggestionOrigin::Template,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gift::catalogue::CatalogueSnapshot;
    use crate::domain::gift::model::Gift;
    use crate::domain::shared::value_objects::GiftId;
    use crate::domain::suggestion::budget::BudgetTier;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    type Query = (String, Option<String>, Option<BudgetTier>);

    /// Serves canned gifts per interest and records every query it receives.
    #[derive(Default)]
    struct RecordingCatalogue {
        answers: HashMap<String, Vec<Gift>>,
        queries: Mutex<Vec<Query>>,
    }

    impl RecordingCatalogue {
        fn with(mut self, interest: &str, gifts: Vec<Gift>) -> Self {
            self.answers.insert(interest.to_string(), gifts);
            self
        }

        fn queries(&self) -> Vec<Query> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl CatalogueAccess for RecordingCatalogue {
        fn lookup(
            &self,
            interest: &str,
            occasion: Option<&str>,
            tier: Option<BudgetTier>,
        ) -> Vec<Gift> {
            self.queries.lock().unwrap().push((
                interest.to_string(),
                occasion.map(str::to_string),
                tier,
            ));
            self.answers.get(interest).cloned().unwrap_or_default()
        }
    }

    fn gift(name: &str, price: f64, interest: &str) -> Gift {
        Gift::from_repository(
            GiftId::new(Uuid::new_v4()),
            name.to_string(),
            price,
            format!("{} for you", name),
            None,
            vec![],
            vec![interest.to_string()],
            vec![],
            None,
        )
    }

    fn names(pool: &CandidatePool) -> Vec<String> {
        match pool {
            CandidatePool::Pool(candidates) => {
                candidates.iter().map(|c| c.gift.name.clone()).collect()
            }
            CandidatePool::GiftCard(card) => vec![card.gift.name.clone()],
        }
    }

    fn request(interests: &[&str], budget: f64, occasion: &str) -> SuggestionRequest {
        SuggestionRequest::new(
            interests.iter().map(|s| s.to_string()).collect(),
            budget,
            occasion,
        )
    }

    #[test]
    fn should_query_catalogue_with_occasion_and_budget_tier() {
        let catalogue = RecordingCatalogue::default().with(
            "Music",
            vec![
                gift("Vinyl A", 200.0, "Music"),
                gift("Vinyl B", 250.0, "Music"),
                gift("Vinyl C", 300.0, "Music"),
            ],
        );

        let pool = collect_candidates(&request(&["Music"], 300.0, "Birthday"), &catalogue);

        assert_eq!(names(&pool), vec!["Vinyl A", "Vinyl B", "Vinyl C"]);
        assert_eq!(
            catalogue.queries(),
            vec![(
                "Music".to_string(),
                Some("Birthday".to_string()),
                Some(BudgetTier::Low)
            )]
        );
    }

    #[test]
    fn should_annotate_only_secondary_interest_matches() {
        let catalogue = CatalogueSnapshot::new(vec![
            gift("Concert Poster", 150.0, "Music"),
            gift("Canvas Print", 180.0, "Art"),
            gift("Drum Sticks", 120.0, "Music"),
        ]);

        let pool = collect_candidates(&request(&["Music", "Art"], 200.0, ""), &catalogue);

        let CandidatePool::Pool(candidates) = pool else {
            panic!("expected a candidate pool");
        };
        assert_eq!(candidates[0].gift.description, "Concert Poster for you");
        assert_eq!(
            candidates[2].gift.description,
            "Canvas Print for you (Also matches your interest in Art)"
        );
    }

    #[test]
    fn should_finish_current_interest_before_stopping_at_cap() {
        let catalogue = RecordingCatalogue::default()
            .with(
                "Music",
                (0..4).map(|i| gift(&format!("M{}", i), 600.0, "Music")).collect(),
            )
            .with(
                "Art",
                (0..4).map(|i| gift(&format!("A{}", i), 600.0, "Art")).collect(),
            )
            .with("Travel", vec![gift("Suitcase", 700.0, "Travel")]);

        let request = request(&["Music", "Art", "Travel"], 800.0, "");

        let pool = collect_candidates(&request, &catalogue);

        assert_eq!(names(&pool).len(), 8);
        let queried: Vec<String> = catalogue.queries().into_iter().map(|q| q.0).collect();
        assert_eq!(queried, vec!["Music", "Art"]);
    }

    #[test]
    fn should_backfill_priority_interests_when_catalogue_is_sparse() {
        let catalogue = CatalogueSnapshot::new(vec![gift("Novel", 150.0, "Books")]);

        let pool = collect_candidates(&request(&["Books", "Music"], 300.0, ""), &catalogue);

        assert_eq!(
            names(&pool),
            vec!["Novel", "Bestseller Paperback Bundle", "Clip-On Reading Light"]
        );
    }

    #[test]
    fn should_run_general_backfill_when_priority_backfill_is_not_enough() {
        let catalogue = CatalogueSnapshot::default();

        let pool = collect_candidates(&request(&["Music", "Cooking"], 80.0, ""), &catalogue);

        assert_eq!(names(&pool), vec!["Guitar Picks Set", "Spice Sampler"]);
    }

    #[test]
    fn should_repeat_template_across_backfill_passes() {
        let catalogue = CatalogueSnapshot::default();

        // Two priority templates leave the pool below the minimum, so the
        // general pass adds the first Technology template a second time.
        let request = request(&["Gardening", "Technology"], 1000.0, "");

        let pool = collect_candidates(&request, &catalogue);

        assert_eq!(
            names(&pool),
            vec!["Smart Watch", "Portable Bluetooth Speaker", "Smart Watch"]
        );
    }

    #[test]
    fn should_stop_priority_backfill_at_max_results() {
        let catalogue = CatalogueSnapshot::default();
        let request = request(&["Technology", "Books", "Fashion", "Music"], 1000.0, "");

        let pool = collect_candidates(&request, &catalogue);

        assert_eq!(
            names(&pool),
            vec![
                "Smart Watch",
                "Portable Bluetooth Speaker",
                "E-Reader",
                "Classic Hardcover Box Set",
                "Designer Sunglasses",
                "Leather Handbag",
            ]
        );
    }

    #[test]
    fn should_stop_general_backfill_at_max_results() {
        let catalogue = CatalogueSnapshot::default();
        let interests = ["Sports", "Music", "Cooking", "Art", "Travel", "Technology"];

        let pool = collect_candidates(&request(&interests, 1000.0, ""), &catalogue);

        // Technology fills two slots first, leaving room for four general picks.
        assert_eq!(
            names(&pool),
            vec![
                "Smart Watch",
                "Portable Bluetooth Speaker",
                "Running Shoes",
                "Ukulele",
                "Cast Iron Skillet",
                "Tabletop Easel Kit",
            ]
        );
    }

    #[test]
    fn should_cap_template_prices_at_budget() {
        let catalogue = CatalogueSnapshot::default();

        let CandidatePool::Pool(candidates) =
            collect_candidates(&request(&["Technology"], 50.0, ""), &catalogue)
        else {
            panic!("expected a candidate pool");
        };

        assert_eq!(candidates[0].gift.name, "USB Cable Set");
        assert_eq!(candidates[0].gift.price, 50.0);
        assert!(candidates.iter().all(|c| c.gift.price <= 50.0));
    }

    #[test]
    fn should_fall_back_to_gift_card_when_nothing_matches() {
        let catalogue = CatalogueSnapshot::default();

        let pool = collect_candidates(&request(&["Gardening"], 750.0, "Birthday"), &catalogue);

        let CandidatePool::GiftCard(card) = pool else {
            panic!("expected the gift card fallback");
        };
        assert_eq!(card.origin, SuggestionOrigin::GiftCard);
        assert_eq!(card.gift.price, 750.0);
    }

    #[test]
    fn should_fall_back_to_gift_card_without_interests() {
        let catalogue = CatalogueSnapshot::new(vec![gift("Novel", 150.0, "Books")]);

        let pool = collect_candidates(&request(&[], 1000.0, "Birthday"), &catalogue);

        assert!(matches!(pool, CandidatePool::GiftCard(_)));
    }
}
