use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::GiftId;

/// A gift entry, either read from the catalogue or synthesized for a
/// single suggestion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: GiftId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub primary_image: Option<String>,
    pub additional_images: Vec<String>,
    pub interest_tags: Vec<String>,
    pub occasion_tags: Vec<String>,
    pub shop_link: Option<String>,
}

impl Gift {
    /// Constructor for data already persisted in the catalogue (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: GiftId,
        name: String,
        price: f64,
        description: String,
        primary_image: Option<String>,
        additional_images: Vec<String>,
        interest_tags: Vec<String>,
        occasion_tags: Vec<String>,
        shop_link: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            description,
            primary_image,
            additional_images,
            interest_tags,
            occasion_tags,
            shop_link,
        }
    }

    /// True when one of the interest tags equals `interest`, ignoring case.
    pub fn has_interest(&self, interest: &str) -> bool {
        let wanted = interest.trim();
        self.interest_tags
            .iter()
            .any(|tag| tag.trim().eq_ignore_ascii_case(wanted))
    }

    /// True when the gift suits `occasion`. Gifts without occasion tags
    /// suit every occasion.
    pub fn suits_occasion(&self, occasion: &str) -> bool {
        if self.occasion_tags.is_empty() {
            return true;
        }
        let wanted = occasion.trim();
        self.occasion_tags
            .iter()
            .any(|tag| tag.trim().eq_ignore_ascii_case(wanted))
    }
}
