//! Turn-based quest battle engine
//!
//! The engine is pure: every randomness source (archetype pick, level
//! variance, damage variance, enemy action choice) flows through the injected
//! [`BattleRng`], and all session state lives in an explicit [`BattleSession`]
//! value rather than ambient flags. The client crate drives it and handles
//! pacing and persistence.

mod combatant;
mod damage;
mod enemy;
mod log;
mod outcome;
mod rng;
mod session;

pub use combatant::Combatant;
pub use damage::{resolve_damage, AttackKind};
pub use enemy::generate_enemy;
pub use log::{BattleLog, BattleLogEntry, LogSource};
pub use outcome::{apply_victory, VictoryRewards, VictorySummary};
pub use rng::{BattleRng, FixedRng};
pub use session::{
    ActionReport, BattleError, BattlePhase, BattleSession, EnemyTurnReport, PlayerAction, Turn,
    HEAL_COST, SPECIAL_ATTACK_COST,
};
