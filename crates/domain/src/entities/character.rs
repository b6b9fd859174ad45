//! Character aggregate - a playable hero owned by a profile
//!
//! # Design
//!
//! - **Private fields**: resource pools are clamped through setters, so no
//!   caller can push health or mana outside `[0, max]`
//! - **Newtypes**: `CharacterName` for the validated name
//! - **Wire format**: serializes to the hosted store's snake_case row shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ids::{CharacterId, ProfileId};
use crate::value_objects::{CharacterClass, CharacterName};

/// Experience required to leave the given level, per the level curve.
fn experience_for_next_level(level: u32) -> u32 {
    level * 100
}

/// A playable character
///
/// # Invariants
///
/// - `health <= max_health` and `mana <= max_mana` (enforced by setters)
/// - `level >= 1`
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use emberquest_domain::{Character, CharacterClass, CharacterName, ProfileId};
///
/// let name = CharacterName::new("Aldric").unwrap();
/// let character = Character::create(ProfileId::new(), name, CharacterClass::Warrior, Utc::now());
///
/// assert_eq!(character.level(), 1);
/// assert_eq!(character.health(), 120);
/// assert_eq!(character.health(), character.max_health());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    // Identity
    id: CharacterId,
    profile_id: ProfileId,
    name: CharacterName,
    class: CharacterClass,

    // Progression
    level: u32,
    experience: u32,

    // Resource pools
    health: u32,
    max_health: u32,
    mana: u32,
    max_mana: u32,

    // Combat stats
    attack: u32,
    defense: u32,
    speed: u32,

    // Metadata
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new level-1 character with the class's starting stat line.
    pub fn create(
        profile_id: ProfileId,
        name: CharacterName,
        class: CharacterClass,
        now: DateTime<Utc>,
    ) -> Self {
        let stats = class.base_stats();
        Self {
            id: CharacterId::new(),
            profile_id,
            name,
            class,
            level: 1,
            experience: 0,
            health: stats.health,
            max_health: stats.health,
            mana: stats.mana,
            max_mana: stats.mana,
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn profile_id(&self) -> ProfileId {
        self.profile_id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> CharacterClass {
        self.class
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
    pub fn health(&self) -> u32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[inline]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    #[inline]
    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    #[inline]
    pub fn attack(&self) -> u32 {
        self.attack
    }

    #[inline]
    pub fn defense(&self) -> u32 {
        self.defense
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Experience required before the next level-up check can pass.
    pub fn experience_to_next_level(&self) -> u32 {
        experience_for_next_level(self.level)
    }

    // =========================================================================
    // Builder Methods (for tests and storage loads)
    // =========================================================================

    /// Set the character's ID (used when loading from storage).
    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    /// Set the character's experience (used when loading from storage).
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    /// Set the character's level (used when loading from storage).
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.max(1);
        self
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Set current health, clamped to `[0, max_health]`.
    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }

    /// Set current mana, clamped to `[0, max_mana]`.
    pub fn set_mana(&mut self, mana: u32) {
        self.mana = mana.min(self.max_mana);
    }

    /// Add earned experience to the running total.
    pub fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    /// Run a single level-up check against the level curve.
    ///
    /// If the accumulated experience has reached `level * 100`, the character
    /// gains one level: max health +10, attack +2, defense +1, max mana +5,
    /// and health is fully restored to the new maximum. Exactly one level is
    /// granted per call even when the total crosses several thresholds.
    ///
    /// Returns `true` when a level was gained.
    pub fn level_up_if_due(&mut self) -> bool {
        if self.experience < self.experience_to_next_level() {
            return false;
        }
        self.level += 1;
        self.max_health += 10;
        self.attack += 2;
        self.defense += 1;
        self.max_mana += 5;
        self.health = self.max_health; // Full heal on level up
        true
    }

    /// Update the last-modified timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format matching the hosted store's characters row
#[derive(Serialize, Deserialize)]
struct CharacterWireFormat {
    id: CharacterId,
    profile_id: ProfileId,
    name: CharacterName,
    class: CharacterClass,
    level: u32,
    experience: u32,
    health: u32,
    max_health: u32,
    mana: u32,
    max_mana: u32,
    attack: u32,
    defense: u32,
    speed: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Serialize for Character {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CharacterWireFormat {
            id: self.id,
            profile_id: self.profile_id,
            name: self.name.clone(),
            class: self.class,
            level: self.level,
            experience: self.experience,
            health: self.health,
            max_health: self.max_health,
            mana: self.mana,
            max_mana: self.max_mana,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Character {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CharacterWireFormat::deserialize(deserializer)?;

        Ok(Character {
            id: wire.id,
            profile_id: wire.profile_id,
            name: wire.name,
            class: wire.class,
            level: wire.level.max(1),
            experience: wire.experience,
            // Stored rows are trusted, but clamp anyway so a hand-edited row
            // cannot break the pool invariant.
            health: wire.health.min(wire.max_health),
            max_health: wire.max_health,
            mana: wire.mana.min(wire.max_mana),
            max_mana: wire.max_mana,
            attack: wire.attack,
            defense: wire.defense,
            speed: wire.speed,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
