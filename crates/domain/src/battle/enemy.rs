//! Enemy generation
//!
//! One archetype is drawn uniformly from a fixed table, then scaled to the
//! quest's minimum level. Generation never fails.

use super::combatant::Combatant;
use super::rng::BattleRng;

struct EnemyArchetype {
    name: &'static str,
    base_attack: u32,
    base_defense: u32,
    base_health: u32,
}

const ENEMY_ARCHETYPES: [EnemyArchetype; 5] = [
    EnemyArchetype {
        name: "Goblin Warrior",
        base_attack: 8,
        base_defense: 3,
        base_health: 60,
    },
    EnemyArchetype {
        name: "Orc Berserker",
        base_attack: 12,
        base_defense: 5,
        base_health: 80,
    },
    EnemyArchetype {
        name: "Dark Mage",
        base_attack: 10,
        base_defense: 2,
        base_health: 50,
    },
    EnemyArchetype {
        name: "Skeleton Knight",
        base_attack: 9,
        base_defense: 7,
        base_health: 70,
    },
    EnemyArchetype {
        name: "Fire Elemental",
        base_attack: 15,
        base_defense: 4,
        base_health: 90,
    },
];

/// Base enemy speed before the random bonus.
const BASE_ENEMY_SPEED: u32 = 8;

/// Generate a fresh enemy for a quest battle.
///
/// The enemy level is `max(1, min_level + jitter - 1)` with jitter in
/// `0..=2`, so it lands within one level of the quest's requirement. Stats
/// scale linearly with the resulting level:
/// health `+10`, attack `+2`, defense `+1` per level. The enemy has no mana
/// pool.
pub fn generate_enemy(min_level: u32, rng: &mut dyn BattleRng) -> Combatant {
    let archetype = &ENEMY_ARCHETYPES[rng.pick_archetype(ENEMY_ARCHETYPES.len())];
    let level = (min_level + rng.level_jitter()).saturating_sub(1).max(1);

    Combatant::new(
        archetype.name,
        level,
        archetype.base_health + level * 10,
        0,
        archetype.base_attack + level * 2,
        archetype.base_defense + level,
        BASE_ENEMY_SPEED + rng.speed_jitter(),
    )
}
