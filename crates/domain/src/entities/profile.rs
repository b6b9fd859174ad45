//! Profile aggregate - account-level progression and currencies
//!
//! A profile belongs to one authenticated user and owns the currency pools
//! shared by all of that user's characters. Profile experience is tracked
//! independently of any character's experience.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::ids::{ProfileId, UserId};
use crate::value_objects::Username;

/// Account-level progression and wallet
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    id: ProfileId,
    user_id: UserId,
    username: Username,
    avatar_url: Option<String>,
    level: u32,
    experience: u32,
    gold: u32,
    gems: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a fresh profile for a newly registered user.
    pub fn new(user_id: UserId, username: Username, now: DateTime<Utc>) -> Self {
        Self {
            id: ProfileId::new(),
            user_id,
            username,
            avatar_url: None,
            level: 1,
            experience: 0,
            gold: 0,
            gems: 0,
            created_at: now,
            updated_at: now,
        }
    }

    // === Accessors ===

    #[inline]
    pub fn id(&self) -> ProfileId {
        self.id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[inline]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn experience(&self) -> u32 {
        self.experience
    }

    #[inline]
    pub fn gold(&self) -> u32 {
        self.gold
    }

    #[inline]
    pub fn gems(&self) -> u32 {
        self.gems
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // === Builder methods (for tests and storage loads) ===

    /// Set the profile's ID (used when loading from storage).
    pub fn with_id(mut self, id: ProfileId) -> Self {
        self.id = id;
        self
    }

    /// Set the gold balance (used when loading from storage).
    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    /// Set the gem balance (used when loading from storage).
    pub fn with_gems(mut self, gems: u32) -> Self {
        self.gems = gems;
        self
    }

    // === Mutations ===

    /// Credit a victory's reward bundle onto the profile.
    pub fn credit_rewards(&mut self, experience: u32, gold: u32, gems: u32) {
        self.experience = self.experience.saturating_add(experience);
        self.gold = self.gold.saturating_add(gold);
        self.gems = self.gems.saturating_add(gems);
    }

    /// Deduct a purchase price from the gold balance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` when the balance cannot cover it.
    pub fn spend_gold(&mut self, price: u32) -> Result<(), DomainError> {
        if self.gold < price {
            return Err(DomainError::constraint(format!(
                "Not enough gold: have {}, need {}",
                self.gold, price
            )));
        }
        self.gold -= price;
        Ok(())
    }

    /// Update the last-modified timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format matching the hosted store's profiles row
#[derive(Serialize, Deserialize)]
struct ProfileWireFormat {
    id: ProfileId,
    user_id: UserId,
    username: Username,
    avatar_url: Option<String>,
    level: u32,
    experience: u32,
    gold: u32,
    gems: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Serialize for Profile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = ProfileWireFormat {
            id: self.id,
            user_id: self.user_id,
            username: self.username.clone(),
            avatar_url: self.avatar_url.clone(),
            level: self.level,
            experience: self.experience,
            gold: self.gold,
            gems: self.gems,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = ProfileWireFormat::deserialize(deserializer)?;

        Ok(Profile {
            id: wire.id,
            user_id: wire.user_id,
            username: wire.username,
            avatar_url: wire.avatar_url,
            level: wire.level.max(1),
            experience: wire.experience,
            gold: wire.gold,
            gems: wire.gems,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile() -> Profile {
        let username = Username::new("player_one").expect("valid username");
        Profile::new(UserId::new(), username, Utc::now())
    }

    #[test]
    fn new_profile_starts_empty() {
        let profile = create_test_profile();
        assert_eq!(profile.level(), 1);
        assert_eq!(profile.experience(), 0);
        assert_eq!(profile.gold(), 0);
        assert_eq!(profile.gems(), 0);
    }

    #[test]
    fn credit_rewards_adds_all_currencies() {
        let mut profile = create_test_profile().with_gold(40);
        profile.credit_rewards(50, 100, 2);
        assert_eq!(profile.experience(), 50);
        assert_eq!(profile.gold(), 140);
        assert_eq!(profile.gems(), 2);
    }

    #[test]
    fn spend_gold_rejects_insufficient_funds() {
        let mut profile = create_test_profile().with_gold(10);
        let err = profile.spend_gold(25).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(profile.gold(), 10);
    }

    #[test]
    fn spend_gold_deducts_price() {
        let mut profile = create_test_profile().with_gold(100);
        profile.spend_gold(30).expect("enough gold");
        assert_eq!(profile.gold(), 70);
    }

    #[test]
    fn serde_round_trip() {
        let profile = create_test_profile().with_gold(75).with_gems(3);
        let json = serde_json::to_string(&profile).expect("serialize");
        let back: Profile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, profile);
    }
}
