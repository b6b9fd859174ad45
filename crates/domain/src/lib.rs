//! EmberQuest domain - core game types, invariants, and the battle engine
//!
//! Everything in this crate is pure: no I/O, no clocks (timestamps are passed
//! in), and no ambient randomness (battle draws flow through [`BattleRng`]).
//! The client crate owns the async edges - the hosted store, pacing, and
//! session orchestration.

pub mod battle;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Character, Item, Profile, Quest, QuestAcceptance, Rarity};

pub use error::DomainError;

// Re-export ID types
pub use ids::{CharacterId, ItemId, ProfileId, QuestId, UserId};

// Re-export value objects
pub use value_objects::{
    CharacterClass, CharacterName, ClassStats, Difficulty, QuestRewards, Username,
};

// Re-export the battle engine surface
pub use battle::{
    apply_victory, generate_enemy, resolve_damage, ActionReport, AttackKind, BattleError,
    BattleLog, BattleLogEntry, BattlePhase, BattleRng, BattleSession, Combatant, EnemyTurnReport,
    FixedRng, LogSource, PlayerAction, Turn, VictoryRewards, VictorySummary, HEAL_COST,
    SPECIAL_ATTACK_COST,
};
