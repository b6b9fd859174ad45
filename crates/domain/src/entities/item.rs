//! Item entity - purchasable equipment and consumables
//!
//! Items are authored content sold in the shop. The actual purchase is an
//! atomic server-side procedure; the client only needs the price and the
//! stat bonuses for display and local gold checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::ids::ItemId;

/// A shop item
///
/// Data-carrying struct with no invariants to protect; fields are public.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    /// Kind of item (e.g., "weapon", "armor", "consumable")
    pub item_type: String,
    pub rarity: Rarity,
    pub attack_bonus: u32,
    pub defense_bonus: u32,
    pub health_bonus: u32,
    pub mana_bonus: u32,
    pub speed_bonus: u32,
    /// Price in gold
    pub price: u32,
    pub created_at: DateTime<Utc>,
}

/// Item rarity tier, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Rarity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Self::Common),
            "uncommon" => Ok(Self::Uncommon),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            other => Err(DomainError::parse(format!("Unknown rarity: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_orders_from_common_to_legendary() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn rarity_round_trips_through_store_text() {
        for rarity in [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ] {
            let parsed: Rarity = rarity.to_string().parse().expect("round trip");
            assert_eq!(parsed, rarity);
        }
    }
}
