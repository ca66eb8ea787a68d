use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::SelectionError;
use crate::domain::shared::value_objects::{GiftId, UserId};

/// The per-user list a gift was put on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionList {
    Wishlist,
    Cart,
}

impl std::fmt::Display for SelectionList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionList::Wishlist => write!(f, "wishlist"),
            SelectionList::Cart => write!(f, "cart"),
        }
    }
}

impl std::str::FromStr for SelectionList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wishlist" => Ok(SelectionList::Wishlist),
            "cart" => Ok(SelectionList::Cart),
            _ => Err(format!("Invalid selection list: {}", s)),
        }
    }
}

/// A gift a user liked or put in the cart.
///
/// Keyed by gift id; the name is only kept for display.
#[derive(Debug, Clone)]
pub struct Selection {
    pub id: Uuid,
    pub user_id: UserId,
    pub gift_id: GiftId,
    pub gift_name: String,
    pub list: SelectionList,
    pub created_at: DateTime<Utc>,
}

impl Selection {
    pub fn new(
        user_id: UserId,
        gift_id: GiftId,
        gift_name: String,
        list: SelectionList,
    ) -> Result<Self, SelectionError> {
        if gift_name.trim().is_empty() {
            return Err(SelectionError::GiftNameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            gift_id,
            gift_name: gift_name.trim().to_string(),
            list,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        gift_id: GiftId,
        gift_name: String,
        list: SelectionList,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            gift_id,
            gift_name,
            list,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("user-1")
    }

    #[test]
    fn should_create_selection_when_name_valid() {
        let gift_id = GiftId::new(Uuid::new_v4());

        let selection = Selection::new(
            user(),
            gift_id,
            "  Smart Watch ".to_string(),
            SelectionList::Wishlist,
        )
        .unwrap();

        assert_eq!(selection.gift_id, gift_id);
        assert_eq!(selection.gift_name, "Smart Watch");
        assert_eq!(selection.list, SelectionList::Wishlist);
    }

    #[test]
    fn should_reject_when_gift_name_blank() {
        let result = Selection::new(
            user(),
            GiftId::new(Uuid::new_v4()),
            "   ".to_string(),
            SelectionList::Cart,
        );

        assert!(matches!(result, Err(SelectionError::GiftNameEmpty)));
    }

    #[test]
    fn should_round_trip_list_names() {
        for list in [SelectionList::Wishlist, SelectionList::Cart] {
            assert_eq!(list.to_string().parse::<SelectionList>(), Ok(list));
        }
        assert!("basket".parse::<SelectionList>().is_err());
    }
}
