use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a user as issued by the external identity provider.
///
/// Wishlists, carts and saved preferences are isolated per user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier carries no characters other than whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Namespace for identifiers of gifts synthesized by the suggestion engine.
const DERIVED_GIFT_NAMESPACE: Uuid = Uuid::from_u128(0x6a1f_3c2e_94d8_4b0a_9e57_2d41_c8f0_7b13);

/// Stable identifier of a gift.
///
/// Wishlist and cart membership is keyed by this value instead of the
/// display name, so two gifts sharing a name never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GiftId(Uuid);

impl GiftId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Deterministic identifier for a gift that only exists inside a
    /// suggestion response. The same key always yields the same id.
    pub fn derived(key: &str) -> Self {
        Self(Uuid::new_v5(&DERIVED_GIFT_NAMESPACE, key.as_bytes()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for GiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for GiftId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for GiftId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| format!("Invalid gift id: {}", s))
    }
}
