use poem_openapi::{Enum, Object};

use business::domain::suggestion::model::{Suggestion, SuggestionOrigin};

#[derive(Debug, Clone, Object)]
pub struct SuggestionRequestDto {
    /// Interest labels, most important first
    pub interests: Vec<String>,
    /// Maximum price the user wants to spend
    pub budget: f64,
    /// Occasion label (e.g. "Birthday")
    pub occasion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Enum)]
pub enum SuggestionOriginDto {
    #[oai(rename = "catalogue")]
    Catalogue,
    #[oai(rename = "template")]
    Template,
    #[oai(rename = "gift_card")]
    GiftCard,
}

impl From<SuggestionOrigin> for SuggestionOriginDto {
    fn from(origin: SuggestionOrigin) -> Self {
        match origin {
            SuggestionOrigin::Catalogue => SuggestionOriginDto::Catalogue,
            SuggestionOrigin::Template => SuggestionOriginDto::Template,
            SuggestionOrigin::GiftCard => SuggestionOriginDto::GiftCard,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionResponse {
    /// Gift identifier, usable for wishlist and cart
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    #[oai(skip_serializing_if_is_none)]
    pub primary_image: Option<String>,
    pub additional_images: Vec<String>,
    pub interest_tags: Vec<String>,
    pub occasion_tags: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub shop_link: Option<String>,
    /// Where the gift came from
    pub origin: SuggestionOriginDto,
    /// Ranking score, higher first
    pub score: f64,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(s: Suggestion) -> Self {
        let gift = s.gift;
        Self {
            id: gift.id.to_string(),
            name: gift.name,
            price: gift.price,
            description: gift.description,
            primary_image: gift.primary_image,
            additional_images: gift.additional_images,
            interest_tags: gift.interest_tags,
            occasion_tags: gift.occasion_tags,
            shop_link: gift.shop_link,
            origin: s.origin.into(),
            score: s.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::gift::model::Gift;
    use business::domain::shared::value_objects::GiftId;

    #[test]
    fn should_flatten_gift_into_response() {
        let gift = Gift::from_repository(
            GiftId::derived("gift-card:250"),
            "Value Gift Card".to_string(),
            250.0,
            "Let them choose".to_string(),
            None,
            vec![],
            vec![],
            vec![],
            None,
        );
        let id = gift.id.to_string();

        let response: SuggestionResponse = Suggestion {
            gift,
            origin: SuggestionOrigin::GiftCard,
            score: 20.0,
        }
        .into();

        assert_eq!(response.id, id);
        assert_eq!(response.price, 250.0);
        assert_eq!(response.origin, SuggestionOriginDto::GiftCard);
        assert_eq!(response.score, 20.0);
    }
}
