//! Damage resolution
//!
//! A pure formula over attacker and defender stats:
//!
//! ```text
//! base = attack * (special ? 1.5 : 1.0)
//! raw  = (base - defense * 0.5) * variance      variance in [0.8, 1.2)
//! damage = max(1, floor(raw))
//! ```
//!
//! The floor of 1 guarantees every hit lands for at least nominal damage, so
//! defense stacking can never deadlock a battle.

use super::combatant::Combatant;
use super::rng::BattleRng;

/// Kind of attack being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Normal,
    Special,
}

impl AttackKind {
    fn multiplier(self) -> f64 {
        match self {
            AttackKind::Normal => 1.0,
            AttackKind::Special => 1.5,
        }
    }
}

/// Compute the damage of one hit.
pub fn resolve_damage(
    attacker: &Combatant,
    defender: &Combatant,
    kind: AttackKind,
    rng: &mut dyn BattleRng,
) -> u32 {
    let base = f64::from(attacker.attack()) * kind.multiplier();
    let variance = rng.damage_variance();
    let raw = (base - f64::from(defender.defense()) * 0.5) * variance;
    raw.floor().max(1.0) as u32
}
