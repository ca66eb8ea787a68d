use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::gift::model::Gift;
use business::domain::shared::value_objects::GiftId;

use crate::numeric;

#[derive(Debug, FromRow)]
pub struct GiftEntity {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub description: String,
    pub primary_image: Option<String>,
    pub additional_images: Vec<String>,
    pub interest_tags: Vec<String>,
    pub occasion_tags: Vec<String>,
    pub shop_link: Option<String>,
}

impl GiftEntity {
    pub fn into_domain(self) -> Result<Gift, RepositoryError> {
        let price = numeric::to_f64(&self.price)?;
        if price < 0.0 || self.name.trim().is_empty() {
            return Err(RepositoryError::CorruptedRecord);
        }

        Ok(Gift::from_repository(
            GiftId::new(self.id),
            self.name,
            price,
            self.description,
            self.primary_image.filter(|i| !i.is_empty()),
            self.additional_images,
            self.interest_tags,
            self.occasion_tags,
            self.shop_link.filter(|l| !l.is_empty()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entity(name: &str, price: &str) -> GiftEntity {
        GiftEntity {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            description: "A description".to_string(),
            primary_image: Some(String::new()),
            additional_images: vec!["https://img/2.png".to_string()],
            interest_tags: vec!["Technology".to_string()],
            occasion_tags: vec![],
            shop_link: Some("https://shop/1".to_string()),
        }
    }

    #[test]
    fn should_convert_row_into_gift() {
        let row = entity("Drone", "3200.00");
        let id = row.id;

        let gift = row.into_domain().unwrap();

        assert_eq!(gift.id, GiftId::new(id));
        assert_eq!(gift.price, 3200.0);
        assert_eq!(gift.primary_image, None);
        assert_eq!(gift.shop_link.as_deref(), Some("https://shop/1"));
        assert!(gift.has_interest("technology"));
    }

    #[test]
    fn should_flag_negative_price_as_corrupted() {
        let result = entity("Drone", "-1").into_domain();

        assert!(matches!(result, Err(RepositoryError::CorruptedRecord)));
    }

    #[test]
    fn should_flag_blank_name_as_corrupted() {
        let result = entity("  ", "10").into_domain();

        assert!(matches!(result, Err(RepositoryError::CorruptedRecord)));
    }
}
