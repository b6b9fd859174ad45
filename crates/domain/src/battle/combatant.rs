//! Combatant model - shared attribute view for both sides of a battle
//!
//! The player's combatant is a working copy of the character; the authoritative
//! record stays with the profile store and is reconciled only on victory. The
//! enemy combatant is owned by the session and discarded with it.

use crate::entities::Character;

/// Either participant in a battle.
///
/// # Invariants
///
/// - `health <= max_health` and `mana <= max_mana` (all mutators clamp)
/// - health 0 is the sole defeat condition for either side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    level: u32,
    health: u32,
    max_health: u32,
    mana: u32,
    max_mana: u32,
    attack: u32,
    defense: u32,
    speed: u32,
}

impl Combatant {
    /// Build a combatant from raw stats (enemy generation).
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: impl Into<String>,
        level: u32,
        max_health: u32,
        max_mana: u32,
        attack: u32,
        defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            attack,
            defense,
            speed,
        }
    }

    /// Working copy of a character entering battle, carrying its current
    /// (possibly depleted) health and mana.
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name().to_string(),
            level: character.level(),
            health: character.health(),
            max_health: character.max_health(),
            mana: character.mana(),
            max_mana: character.max_mana(),
            attack: character.attack(),
            defense: character.defense(),
            speed: character.speed(),
        }
    }

    // === Accessors ===

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
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

    /// True once health has reached zero.
    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    // === Mutations (session-internal) ===

    /// Subtract damage, flooring health at zero.
    pub(crate) fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restore health, capped at the maximum.
    pub(crate) fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Deduct a mana cost. Returns `false` (and changes nothing) when the
    /// pool cannot cover it.
    pub(crate) fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }

    /// Reset both pools to the given values (battle restart). Clamped.
    pub(crate) fn reset_pools(&mut self, health: u32, mana: u32) {
        self.health = health.min(self.max_health);
        self.mana = mana.min(self.max_mana);
    }
}
