use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::selection::model::{Selection, SelectionList};
use business::domain::shared::value_objects::{GiftId, UserId};

#[derive(Debug, FromRow)]
pub struct SelectionEntity {
    pub id: Uuid,
    pub user_id: String,
    pub gift_id: Uuid,
    pub gift_name: String,
    pub list: String,
    pub created_at: DateTime<Utc>,
}

impl SelectionEntity {
    pub fn into_domain(self) -> Result<Selection, RepositoryError> {
        let list = self
            .list
            .parse::<SelectionList>()
            .map_err(|_| RepositoryError::CorruptedRecord)?;

        Ok(Selection::from_repository(
            self.id,
            UserId::new(self.user_id),
            GiftId::new(self.gift_id),
            self.gift_name,
            list,
            self.created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(list: &str) -> SelectionEntity {
        SelectionEntity {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            gift_id: Uuid::new_v4(),
            gift_name: "Vinyl Player".to_string(),
            list: list.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_convert_row_into_selection() {
        let selection = entity("cart").into_domain().unwrap();

        assert_eq!(selection.list, SelectionList::Cart);
        assert_eq!(selection.user_id.as_str(), "user-1");
        assert_eq!(selection.gift_name, "Vinyl Player");
    }

    #[test]
    fn should_flag_unknown_list_as_corrupted() {
        let result = entity("basket").into_domain();

        assert!(matches!(result, Err(RepositoryError::CorruptedRecord)));
    }
}
