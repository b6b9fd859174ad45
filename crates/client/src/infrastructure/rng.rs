//! Dice-backed battle randomness
//!
//! The real [`BattleRng`] used in play. Seedable so a battle can be replayed
//! exactly; `new()` seeds from OS entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use emberquest_domain::BattleRng;

/// Probability of the enemy choosing its heavy attack.
const ENEMY_SPECIAL_CHANCE: f64 = 0.3;

/// `rand`-backed [`BattleRng`].
#[derive(Debug, Clone)]
pub struct DiceRng {
    rng: StdRng,
}

impl DiceRng {
    /// Entropy-seeded dice for normal play.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed dice for replays and integration tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DiceRng {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRng for DiceRng {
    fn pick_archetype(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }

    fn level_jitter(&mut self) -> u32 {
        self.rng.gen_range(0..=2)
    }

    fn speed_jitter(&mut self) -> u32 {
        self.rng.gen_range(0..=5)
    }

    fn damage_variance(&mut self) -> f64 {
        self.rng.gen_range(0.8..1.2)
    }

    fn enemy_goes_special(&mut self) -> bool {
        self.rng.gen_bool(ENEMY_SPECIAL_CHANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_inside_their_contracts() {
        let mut dice = DiceRng::seeded(7);
        for _ in 0..1000 {
            assert!(dice.pick_archetype(5) < 5);
            assert!(dice.level_jitter() <= 2);
            assert!(dice.speed_jitter() <= 5);
            let variance = dice.damage_variance();
            assert!((0.8..1.2).contains(&variance));
            let _ = dice.enemy_goes_special();
        }
    }

    #[test]
    fn same_seed_replays_the_same_draws() {
        let mut first = DiceRng::seeded(42);
        let mut second = DiceRng::seeded(42);
        for _ in 0..100 {
            assert_eq!(first.pick_archetype(5), second.pick_archetype(5));
            assert_eq!(first.damage_variance(), second.damage_variance());
        }
    }

    #[test]
    fn special_chance_is_roughly_thirty_percent() {
        let mut dice = DiceRng::seeded(11);
        let specials = (0..10_000)
            .filter(|_| dice.enemy_goes_special())
            .count();
        // Loose band; this is a sanity check, not a statistics exam.
        assert!((2_500..3_500).contains(&specials));
    }
}
